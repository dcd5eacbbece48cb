mod columns;
pub use columns::resolve_columns;

mod config;
pub use config::IntrospectConfig;

mod expr;
pub use expr::{split_expressions, strip_type_cast};

mod introspect;
pub use introspect::{list_indexes, IndexListing, Introspector};

mod opclass;
pub use opclass::resolve_operator_classes;

mod predicate;
pub use predicate::extract_where_clause;

mod sort_option;
pub use sort_option::{decode_sort_option, SortOption};

pub use idxkit_core::{async_trait, schema, Catalog, Error, Result};
