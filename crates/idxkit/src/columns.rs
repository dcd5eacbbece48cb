use crate::{
    expr::{split_expressions, strip_type_cast},
    predicate::strip_where_clause,
    sort_option::decode_sort_option,
};

use idxkit_core::{schema::IndexCatalogEntry, Catalog, Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// `ON <table> [USING <method>] (<expr-list>)`, capturing `<expr-list>`.
///
/// Table path segments are bare or double-quoted identifiers.
fn expression_list() -> &'static Regex {
    static EXPRESSION_LIST: OnceLock<Regex> = OnceLock::new();
    EXPRESSION_LIST.get_or_init(|| {
        Regex::new(concat!(
            r#" ON (?:ONLY )?"#,
            r#"(?:"(?:[^"]|"")*"|[\w$]+)(?:\.(?:"(?:[^"]|"")*"|[\w$]+))*"#,
            r#"(?: USING \w+)? \((.+)\)"#,
        ))
        .expect("expression list pattern is valid")
    })
}

/// Clauses rendered between the key list and the predicate:
/// `INCLUDE (...)`, `NULLS NOT DISTINCT` and `WITH (<storage options>)`.
fn trailing_clauses() -> &'static Regex {
    static TRAILING_CLAUSES: OnceLock<Regex> = OnceLock::new();
    TRAILING_CLAUSES.get_or_init(|| {
        Regex::new(concat!(
            r#"(?: INCLUDE \((?:"(?:[^"]|"")*"|[^()"])*\))?"#,
            r#"(?: NULLS NOT DISTINCT)?"#,
            r#"(?: WITH \((?:"(?:[^"]|"")*"|'(?:[^']|'')*'|[^()"'])*\))?$"#,
        ))
        .expect("trailing clause pattern is valid")
    })
}

/// Resolves the key columns of an index, in key order.
///
/// Named columns get their ordering suffix appended. When no attribute
/// number maps to a column, the keys are read back from the expression list
/// of the index definition instead. An empty result means the index cannot
/// be represented.
pub async fn resolve_columns(
    catalog: &impl Catalog,
    entry: &IndexCatalogEntry,
) -> Result<Vec<String>> {
    let columns = column_names(catalog, entry).await?;

    if columns.is_empty() {
        return Ok(expression_columns(&entry.definition));
    }

    columns
        .into_iter()
        .enumerate()
        .map(|(i, column)| {
            let Some(option) = entry.sort_options.get(i) else {
                return Err(Error::invalid_result(format!(
                    "index `{}` has {} sort options for {} key columns",
                    entry.name,
                    entry.sort_options.len(),
                    entry.keys().len()
                )));
            };

            Ok(column + decode_sort_option(*option))
        })
        .collect()
}

/// Names of the key columns that map to a table column, in key order.
async fn column_names(catalog: &impl Catalog, entry: &IndexCatalogEntry) -> Result<Vec<String>> {
    if entry.is_expression_only() {
        return Ok(vec![]);
    }

    let attnums: Vec<i16> = entry
        .keys()
        .iter()
        .copied()
        .filter(|attnum| *attnum > 0)
        .collect();

    let names = catalog.column_names(entry.relation, &attnums).await?;

    Ok(entry
        .keys()
        .iter()
        .filter_map(|attnum| names.get(attnum).cloned())
        .collect())
}

/// Reads the key expressions of an index back out of its definition.
pub(crate) fn expression_columns(definition: &str) -> Vec<String> {
    let definition = strip_where_clause(definition);
    let definition = match trailing_clauses().find(definition) {
        Some(found) => &definition[..found.start()],
        None => definition,
    };

    let Some(captures) = expression_list().captures(definition) else {
        return vec![];
    };

    split_expressions(&captures[1])
        .iter()
        .map(|fragment| strip_type_cast(fragment))
        .collect()
}
