use idxkit::extract_where_clause;

#[test]
fn partial_index_predicate() {
    assert_eq!(
        extract_where_clause("CREATE INDEX idx ON t USING btree (a) WHERE (active = true)"),
        Some("(active = true)".to_string())
    );
}

#[test]
fn predicate_runs_to_end_of_definition() {
    assert_eq!(
        extract_where_clause(
            "CREATE UNIQUE INDEX idx ON t (email) WHERE ((deleted_at IS NULL) AND (active = true))"
        ),
        Some("((deleted_at IS NULL) AND (active = true))".to_string())
    );
}

#[test]
fn non_partial_index() {
    assert_eq!(extract_where_clause("CREATE INDEX idx ON t USING btree (a)"), None);
}

#[test]
fn lowercase_where_is_not_a_clause() {
    assert_eq!(extract_where_clause("CREATE INDEX idx ON t (wherever)"), None);
}
