#![allow(dead_code)]

use idxkit::{
    async_trait,
    schema::{IndexCatalogEntry, Oid, OperatorClass},
    Catalog, Error, Result,
};
use std::{
    collections::HashMap,
    sync::{Mutex, Once},
};

pub const USERS: Oid = Oid(16384);

pub const INT4_OPS: Oid = Oid(1978);
pub const TEXT_OPS: Oid = Oid(3126);
pub const TEXT_PATTERN_OPS: Oid = Oid(4217);
pub const GIN_TRGM_OPS: Oid = Oid(16500);

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// An in-memory catalog that records every lookup it serves.
#[derive(Debug, Default)]
pub struct Fixture {
    pub indexes: HashMap<String, Vec<IndexCatalogEntry>>,
    pub columns: HashMap<(Oid, i16), String>,
    pub operator_classes: HashMap<Oid, OperatorClass>,
    pub fail_on: Option<&'static str>,
    pub lookups: Mutex<Vec<String>>,
}

impl Fixture {
    pub fn new() -> Self {
        init_logging();

        let mut fixture = Self::default();
        fixture.add_column(USERS, 1, "id");
        fixture.add_column(USERS, 2, "created_at");
        fixture.add_column(USERS, 3, "email");
        fixture.add_column(USERS, 4, "name");
        fixture.add_operator_class(INT4_OPS, "int4_ops", true);
        fixture.add_operator_class(TEXT_OPS, "text_ops", true);
        fixture.add_operator_class(TEXT_PATTERN_OPS, "text_pattern_ops", false);
        fixture.add_operator_class(GIN_TRGM_OPS, "gin_trgm_ops", false);
        fixture
    }

    pub fn add_column(&mut self, relation: Oid, attnum: i16, name: &str) {
        self.columns.insert((relation, attnum), name.to_string());
    }

    pub fn add_operator_class(&mut self, oid: Oid, name: &str, is_default: bool) {
        self.operator_classes
            .insert(oid, OperatorClass::new(name, is_default));
    }

    pub fn add_index(&mut self, table: &str, entry: IndexCatalogEntry) {
        self.indexes.entry(table.to_string()).or_default().push(entry);
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    fn record(&self, lookup: String) -> Result<()> {
        if self.fail_on.is_some_and(|prefix| lookup.starts_with(prefix)) {
            return Err(Error::driver(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            )));
        }

        self.lookups.lock().unwrap().push(lookup);
        Ok(())
    }
}

#[async_trait]
impl Catalog for Fixture {
    async fn index_entries(&self, table: &str) -> Result<Vec<IndexCatalogEntry>> {
        self.record(format!("indexes {table}"))?;
        Ok(self.indexes.get(table).cloned().unwrap_or_default())
    }

    async fn column_names(&self, relation: Oid, attnums: &[i16]) -> Result<HashMap<i16, String>> {
        self.record(format!("columns {relation} {attnums:?}"))?;
        Ok(attnums
            .iter()
            .filter_map(|attnum| {
                self.columns
                    .get(&(relation, *attnum))
                    .map(|name| (*attnum, name.clone()))
            })
            .collect())
    }

    async fn operator_class(&self, oid: Oid) -> Result<Option<OperatorClass>> {
        self.record(format!("opclass {oid}"))?;
        Ok(self.operator_classes.get(&oid).cloned())
    }
}

/// A btree index entry over `attnums` with default options.
pub fn entry(name: &str, attnums: &[i16], definition: &str) -> IndexCatalogEntry {
    IndexCatalogEntry {
        name: name.to_string(),
        unique: false,
        key_attnums: attnums.to_vec(),
        definition: definition.to_string(),
        relation: USERS,
        access_method: "btree".to_string(),
        operator_class_oids: vec![INT4_OPS; attnums.len()],
        sort_options: vec![0; attnums.len()],
    }
}
