use indexmap::IndexMap;

/// Structured description of an index, reconstructed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDefinition {
    /// The table being indexed
    pub table: String,

    /// Name of the index
    pub name: String,

    /// When `true`, indexed entries are unique
    pub unique: bool,

    /// Indexed columns or expressions, in key order.
    ///
    /// A column may carry an ordering suffix such as `" DESC NULLS FIRST"`.
    /// Expression fragments are kept verbatim, including surrounding
    /// whitespace.
    pub columns: Vec<String>,

    /// Prefix lengths. Always empty; prefix-length indexes are not modelled.
    pub lengths: Vec<usize>,

    /// Predicate of a partial index
    pub where_predicate: Option<String>,

    /// Access method, e.g. `btree` or `gin`
    pub using: String,

    /// Non-default operator classes, keyed by column
    pub operator_class_overrides: IndexMap<String, String>,
}

impl IndexDefinition {
    pub fn is_partial(&self) -> bool {
        self.where_predicate.is_some()
    }

    /// Returns the operator class override for `column`, if any.
    pub fn operator_class(&self, column: &str) -> Option<&str> {
        self.operator_class_overrides
            .get(column)
            .map(String::as_str)
    }

    pub(crate) fn has_diff(&self, other: &IndexDefinition) -> bool {
        self.table != other.table
            || self.columns != other.columns
            || self.unique != other.unique
            || self.where_predicate != other.where_predicate
            || self.using != other.using
            || self.operator_class_overrides != other.operator_class_overrides
    }
}
