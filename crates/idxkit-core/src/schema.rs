mod diff;
pub use diff::{IndicesDiff, IndicesDiffItem};

mod entry;
pub use entry::IndexCatalogEntry;

mod index;
pub use index::IndexDefinition;

mod oid;
pub use oid::Oid;

mod operator_class;
pub use operator_class::OperatorClass;
