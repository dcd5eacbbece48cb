mod create_index;
pub use create_index::{CreateIndex, IndexColumn};

mod drop_index;
pub use drop_index::DropIndex;

mod name;
pub use name::Name;

#[derive(Debug, Clone)]
pub enum Statement {
    CreateIndex(CreateIndex),
    DropIndex(DropIndex),
}
