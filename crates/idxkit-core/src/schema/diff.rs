use super::IndexDefinition;

use std::collections::{HashMap, HashSet};

/// The changes needed to turn one set of index definitions into another.
///
/// Indexes are matched by name. Drops and alters follow the order of `from`;
/// creates follow the order of `to`.
#[derive(Debug)]
pub struct IndicesDiff<'a> {
    items: Vec<IndicesDiffItem<'a>>,
}

impl<'a> IndicesDiff<'a> {
    pub fn from(from: &'a [IndexDefinition], to: &'a [IndexDefinition]) -> Self {
        let mut items = vec![];
        let mut matched = HashSet::new();

        let to_map = HashMap::<&str, &'a IndexDefinition>::from_iter(
            to.iter().map(|to| (to.name.as_str(), to)),
        );

        for from in from {
            let Some(to) = to_map.get(from.name.as_str()) else {
                items.push(IndicesDiffItem::DropIndex(from));
                continue;
            };

            matched.insert(to.name.as_str());

            if from.has_diff(to) {
                items.push(IndicesDiffItem::AlterIndex { from, to });
            }
        }

        for to in to {
            if !matched.contains(to.name.as_str()) {
                items.push(IndicesDiffItem::CreateIndex(to));
            }
        }

        Self { items }
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndicesDiffItem<'a>> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for IndicesDiff<'a> {
    type Item = IndicesDiffItem<'a>;
    type IntoIter = std::vec::IntoIter<IndicesDiffItem<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum IndicesDiffItem<'a> {
    CreateIndex(&'a IndexDefinition),
    DropIndex(&'a IndexDefinition),
    AlterIndex {
        from: &'a IndexDefinition,
        to: &'a IndexDefinition,
    },
}
