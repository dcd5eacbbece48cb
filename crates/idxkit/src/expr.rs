use regex::Regex;
use std::sync::OnceLock;

/// `(<expr>)::<type>`, where `<expr>` may contain one level of parentheses.
fn type_cast() -> &'static Regex {
    static TYPE_CAST: OnceLock<Regex> = OnceLock::new();
    TYPE_CAST.get_or_init(|| {
        Regex::new(r"\(((?:[^()]|\([^()]*\))+)\)::\w+").expect("type cast pattern is valid")
    })
}

/// Splits a comma separated list on its top-level commas.
///
/// Commas nested inside parentheses stay part of their fragment. Fragments
/// are returned verbatim, whitespace included. Unbalanced parentheses only
/// shift the nesting depth; they are never an error.
pub fn split_expressions(text: &str) -> Vec<String> {
    let mut fragments = vec![];
    let mut current = String::new();
    let mut depth = 0isize;

    for ch in text.chars() {
        match ch {
            ',' if depth == 0 => {
                fragments.push(std::mem::take(&mut current));
                continue;
            }
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }

        current.push(ch);
    }

    if !current.is_empty() {
        fragments.push(current);
    }

    fragments
}

/// Replaces the first `(<expr>)::<type>` cast in `fragment` with `<expr>`.
pub fn strip_type_cast(fragment: &str) -> String {
    type_cast().replace(fragment, "$1").into_owned()
}
