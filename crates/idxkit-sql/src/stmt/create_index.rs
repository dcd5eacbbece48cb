use super::{Name, Statement};

use idxkit_core::schema::IndexDefinition;

/// Ordering annotations a resolved column may end with, longest first.
const ORDERINGS: &[&str] = &[
    " DESC NULLS FIRST",
    " DESC NULLS LAST",
    " NULLS FIRST",
    " NULLS LAST",
    " DESC",
];

#[derive(Debug, Clone)]
pub struct CreateIndex {
    /// Name of the index
    pub name: Name,

    /// Which table to index
    pub on: Name,

    /// The keys of the index
    pub columns: Vec<IndexColumn>,

    /// When true, the index is unique
    pub unique: bool,

    /// Access method; `None` uses the database default
    pub using: Option<String>,

    /// Predicate of a partial index
    pub predicate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexColumn {
    /// Column name or expression
    pub expr: String,

    /// Operator class, when not the default for the column type
    pub opclass: Option<String>,

    /// Ordering annotation, e.g. `DESC NULLS FIRST`
    pub ordering: Option<String>,
}

impl IndexColumn {
    /// Splits a resolved column such as `created_at DESC` into its
    /// expression and ordering.
    pub fn from_resolved(column: &str, opclass: Option<&str>) -> Self {
        let (expr, ordering) = ORDERINGS
            .iter()
            .find_map(|ordering| {
                column
                    .strip_suffix(ordering)
                    .map(|expr| (expr, Some(ordering.trim_start().to_string())))
            })
            .unwrap_or((column, None));

        Self {
            expr: expr.trim().to_string(),
            opclass: opclass.map(str::to_string),
            ordering,
        }
    }

    /// Returns `true` when the key is a bare column name.
    pub fn is_column(&self) -> bool {
        let bare = self
            .expr
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '$');
        let quoted = self.expr.len() > 1
            && self.expr.starts_with('"')
            && self.expr.ends_with('"');

        !self.expr.is_empty() && (bare || quoted)
    }
}

impl Statement {
    pub fn create_index(index: &IndexDefinition) -> Self {
        CreateIndex {
            name: Name::from(&index.name),
            on: Name::from(&index.table),
            columns: index
                .columns
                .iter()
                .map(|column| IndexColumn::from_resolved(column, index.operator_class(column)))
                .collect(),
            unique: index.unique,
            using: Some(index.using.clone()).filter(|using| !using.is_empty() && using != "btree"),
            predicate: index.where_predicate.clone(),
        }
        .into()
    }
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}
