use regex::Regex;
use std::sync::OnceLock;

fn where_clause() -> &'static Regex {
    static WHERE_CLAUSE: OnceLock<Regex> = OnceLock::new();
    WHERE_CLAUSE.get_or_init(|| Regex::new(r" WHERE (.+)$").expect("where pattern is valid"))
}

/// Returns the predicate of a partial index definition, if there is one.
pub fn extract_where_clause(definition: &str) -> Option<String> {
    where_clause()
        .captures(definition)
        .map(|captures| captures[1].to_string())
}

/// Returns `definition` with any trailing `WHERE` clause removed.
pub(crate) fn strip_where_clause(definition: &str) -> &str {
    match where_clause().find(definition) {
        Some(found) => &definition[..found.start()],
        None => definition,
    }
}
