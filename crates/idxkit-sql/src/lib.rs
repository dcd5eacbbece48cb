pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::Statement;
