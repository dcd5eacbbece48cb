use idxkit_core::schema::{IndexDefinition, IndicesDiff, IndicesDiffItem};
use indexmap::IndexMap;
use pretty_assertions::assert_eq;

fn index(name: &str, columns: &[&str]) -> IndexDefinition {
    IndexDefinition {
        table: "users".to_string(),
        name: name.to_string(),
        unique: false,
        columns: columns.iter().map(|c| c.to_string()).collect(),
        lengths: vec![],
        where_predicate: None,
        using: "btree".to_string(),
        operator_class_overrides: IndexMap::new(),
    }
}

#[test]
fn identical_sets_have_no_diff() {
    let from = vec![index("a_idx", &["a"]), index("b_idx", &["b"])];
    let to = from.clone();

    let diff = IndicesDiff::from(&from, &to);
    assert!(diff.is_empty());
    assert_eq!(diff.len(), 0);
}

#[test]
fn new_index_is_created() {
    let from = vec![index("a_idx", &["a"])];
    let to = vec![index("a_idx", &["a"]), index("b_idx", &["b"])];

    let items: Vec<_> = IndicesDiff::from(&from, &to).into_iter().collect();
    assert_eq!(items, vec![IndicesDiffItem::CreateIndex(&to[1])]);
}

#[test]
fn missing_index_is_dropped() {
    let from = vec![index("a_idx", &["a"]), index("b_idx", &["b"])];
    let to = vec![index("b_idx", &["b"])];

    let items: Vec<_> = IndicesDiff::from(&from, &to).into_iter().collect();
    assert_eq!(items, vec![IndicesDiffItem::DropIndex(&from[0])]);
}

#[test]
fn changed_sort_order_is_an_alter() {
    let from = vec![index("created_idx", &["created_at"])];
    let to = vec![index("created_idx", &["created_at DESC"])];

    let items: Vec<_> = IndicesDiff::from(&from, &to).into_iter().collect();
    assert_eq!(
        items,
        vec![IndicesDiffItem::AlterIndex {
            from: &from[0],
            to: &to[0],
        }]
    );
}

#[test]
fn changed_predicate_uniqueness_and_opclass_are_alters() {
    let from = vec![
        index("p_idx", &["a"]),
        index("u_idx", &["b"]),
        index("o_idx", &["c"]),
    ];

    let mut to = from.clone();
    to[0].where_predicate = Some("(active = true)".to_string());
    to[1].unique = true;
    to[2]
        .operator_class_overrides
        .insert("c".to_string(), "text_pattern_ops".to_string());

    let diff = IndicesDiff::from(&from, &to);
    assert_eq!(diff.len(), 3);
    assert!(diff
        .iter()
        .all(|item| matches!(item, IndicesDiffItem::AlterIndex { .. })));
}

#[test]
fn drops_and_alters_precede_creates() {
    let from = vec![index("old_idx", &["a"]), index("same_idx", &["b"])];
    let to = vec![index("new_idx", &["c"]), index("same_idx", &["b", "c"])];

    let items: Vec<_> = IndicesDiff::from(&from, &to).into_iter().collect();
    assert_eq!(
        items,
        vec![
            IndicesDiffItem::DropIndex(&from[0]),
            IndicesDiffItem::AlterIndex {
                from: &from[1],
                to: &to[1],
            },
            IndicesDiffItem::CreateIndex(&to[0]),
        ]
    );
}
