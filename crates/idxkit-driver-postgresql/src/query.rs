//! Catalog queries. Vector columns are cast to arrays so they decode as
//! plain `Vec`s.

/// Non-primary indexes of a table, ordered by index name.
///
/// `indkey` also lists `INCLUDE` columns, so it is cut to the `indnkeyatts`
/// key slots that `indclass` and `indoption` describe. Its lower bound is 0.
///
/// `$1` is the table name. `$2` is the schema; when NULL, the schemas on
/// the search path are used.
pub(crate) const INDEX_ENTRIES: &str = "\
SELECT DISTINCT i.relname AS name, \
    d.indisunique AS is_unique, \
    (d.indkey::int2[])[0:d.indnkeyatts - 1] AS key_attnums, \
    pg_get_indexdef(d.indexrelid) AS definition, \
    t.oid AS relation, \
    am.amname AS access_method, \
    d.indclass::oid[] AS operator_class_oids, \
    d.indoption::int2[] AS sort_options \
FROM pg_class t \
INNER JOIN pg_index d ON t.oid = d.indrelid \
INNER JOIN pg_class i ON d.indexrelid = i.oid \
INNER JOIN pg_am am ON i.relam = am.oid \
LEFT JOIN pg_namespace n ON n.oid = t.relnamespace \
WHERE i.relkind IN ('i', 'I') \
    AND d.indisprimary = 'f' \
    AND t.relname = $1 \
    AND ((($2::text) IS NULL AND n.nspname = ANY (current_schemas(false))) OR n.nspname = $2::text) \
ORDER BY i.relname";

/// Names of the given attributes of a relation.
pub(crate) const COLUMN_NAMES: &str = "\
SELECT a.attnum, a.attname \
FROM pg_attribute a \
WHERE a.attrelid = $1 \
    AND a.attnum = ANY ($2)";

/// Name and default-ness of an operator class.
pub(crate) const OPERATOR_CLASS: &str = "\
SELECT opcname, opcdefault \
FROM pg_opclass \
WHERE oid = $1";
