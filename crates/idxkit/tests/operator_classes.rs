mod support;

use idxkit::resolve_operator_classes;
use support::{entry, Fixture, GIN_TRGM_OPS, INT4_OPS, TEXT_OPS, TEXT_PATTERN_OPS};

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[tokio::test]
async fn default_classes_are_omitted() {
    let catalog = Fixture::new();
    let mut entry = entry("idx", &[1, 3], "CREATE INDEX idx ON users (id, email)");
    entry.operator_class_oids = vec![INT4_OPS, TEXT_OPS];

    let overrides = resolve_operator_classes(&catalog, &columns(&["id", "email"]), &entry)
        .await
        .unwrap();
    assert!(overrides.is_empty());
}

#[tokio::test]
async fn non_default_classes_are_keyed_by_column() {
    let catalog = Fixture::new();
    let mut entry = entry(
        "idx",
        &[1, 3, 4],
        "CREATE INDEX idx ON users (id, email text_pattern_ops, name gin_trgm_ops)",
    );
    entry.operator_class_oids = vec![INT4_OPS, TEXT_PATTERN_OPS, GIN_TRGM_OPS];

    let overrides =
        resolve_operator_classes(&catalog, &columns(&["id", "email", "name"]), &entry)
            .await
            .unwrap();

    assert_eq!(overrides.len(), 2);
    assert_eq!(overrides["email"], "text_pattern_ops");
    assert_eq!(overrides["name"], "gin_trgm_ops");
    assert_eq!(
        overrides.keys().collect::<Vec<_>>(),
        vec!["email", "name"]
    );
}

#[tokio::test]
async fn unknown_class_contributes_nothing() {
    let catalog = Fixture::new();
    let mut entry = entry("idx", &[3], "CREATE INDEX idx ON users (email)");
    entry.operator_class_oids = vec![idxkit::schema::Oid(424242)];

    let overrides = resolve_operator_classes(&catalog, &columns(&["email"]), &entry)
        .await
        .unwrap();
    assert!(overrides.is_empty());
    assert_eq!(catalog.lookups(), vec!["opclass 424242"]);
}

#[tokio::test]
async fn annotated_column_is_the_key() {
    let catalog = Fixture::new();
    let mut entry = entry("idx", &[3], "CREATE INDEX idx ON users (email text_pattern_ops DESC)");
    entry.operator_class_oids = vec![TEXT_PATTERN_OPS];

    let overrides = resolve_operator_classes(&catalog, &columns(&["email DESC"]), &entry)
        .await
        .unwrap();
    assert_eq!(overrides["email DESC"], "text_pattern_ops");
}
