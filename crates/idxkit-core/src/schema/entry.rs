use super::Oid;

/// One physical index as reported by the system catalog.
///
/// The per-key vectors (`key_attnums`, `operator_class_oids`,
/// `sort_options`) are positional: slot `i` of each describes the `i`-th key
/// of the index. Expression keys carry attribute number `0`. Covering
/// (`INCLUDE`) columns have no operator class or sort option and, when a
/// catalog reports them at all, trail the key columns in `key_attnums`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexCatalogEntry {
    /// Name of the index
    pub name: String,

    /// When `true`, indexed entries are unique
    pub unique: bool,

    /// Attribute numbers of the indexed columns, in key order
    pub key_attnums: Vec<i16>,

    /// The full `CREATE INDEX` statement as rendered by the catalog
    pub definition: String,

    /// The table that owns the index
    pub relation: Oid,

    /// Access method, e.g. `btree` or `gin`
    pub access_method: String,

    /// Operator class of each key
    pub operator_class_oids: Vec<Oid>,

    /// Sort-option bitmask of each key
    pub sort_options: Vec<i16>,
}

impl IndexCatalogEntry {
    /// Attribute numbers of the key columns, without trailing `INCLUDE`
    /// columns.
    ///
    /// `key_attnums` is cut down to the per-key vectors only when both agree
    /// on a shorter length. Any other disagreement is left for the caller to
    /// report.
    pub fn keys(&self) -> &[i16] {
        let keys = self.operator_class_oids.len();

        if keys == self.sort_options.len() && keys < self.key_attnums.len() {
            &self.key_attnums[..keys]
        } else {
            &self.key_attnums
        }
    }

    /// Returns `true` when every key slot is an expression (attribute number
    /// `0`) or the key list is empty.
    pub fn is_expression_only(&self) -> bool {
        self.keys().iter().all(|attnum| *attnum <= 0)
    }
}
