use crate::{
    columns::resolve_columns, opclass::resolve_operator_classes,
    predicate::extract_where_clause, IntrospectConfig,
};

use idxkit_core::{
    err,
    schema::{IndexCatalogEntry, IndexDefinition},
    Catalog, Error, Result,
};
use indexmap::IndexMap;
use log::{debug, warn};

/// Reconstructs index definitions from a catalog.
#[derive(Debug)]
pub struct Introspector<C> {
    catalog: C,
    config: IntrospectConfig,
}

/// The outcome of introspecting the indexes of one table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IndexListing {
    /// Resolved indexes, in the order the catalog reported them
    pub indexes: Vec<IndexDefinition>,

    /// Names of indexes that resolved to no columns and were skipped
    pub unrepresentable: Vec<String>,
}

/// Lists the indexes of `table` using the default configuration.
pub async fn list_indexes(catalog: &impl Catalog, table: &str) -> Result<Vec<IndexDefinition>> {
    Introspector::new(catalog).list_indexes(table).await
}

impl<C: Catalog> Introspector<C> {
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, IntrospectConfig::default())
    }

    pub fn with_config(catalog: C, config: IntrospectConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn config(&self) -> &IntrospectConfig {
        &self.config
    }

    /// Returns the non-primary indexes of `table`, ordered as the catalog
    /// reports them. Indexes that cannot be represented are left out.
    pub async fn list_indexes(&self, table: &str) -> Result<Vec<IndexDefinition>> {
        Ok(self.introspect(table).await?.indexes)
    }

    /// Like [`list_indexes`](Self::list_indexes), but also reports which
    /// indexes were skipped.
    pub async fn introspect(&self, table: &str) -> Result<IndexListing> {
        let entries = self
            .catalog
            .index_entries(table)
            .await
            .map_err(|e| e.context(err!("listing indexes of `{table}`")))?;

        let mut listing = IndexListing::default();

        for entry in &entries {
            let index = self
                .index_definition(table, entry)
                .await
                .map_err(|e| e.context(err!("resolving index `{}`", entry.name)))?;

            match index {
                Some(index) => {
                    debug!(
                        "resolved index; table={} index={} columns={} using={}",
                        table,
                        index.name,
                        index.columns.len(),
                        index.using
                    );
                    listing.indexes.push(index);
                }
                None if self.config.strict => {
                    return Err(Error::unrepresentable_index(&entry.name));
                }
                None => {
                    warn!(
                        "skipping index with no resolvable columns; table={} index={}",
                        table, entry.name
                    );
                    listing.unrepresentable.push(entry.name.clone());
                }
            }
        }

        Ok(listing)
    }

    /// Builds the definition of a single catalog entry.
    ///
    /// Returns `None` when the entry resolves to neither named columns nor an
    /// expression list.
    pub async fn index_definition(
        &self,
        table: &str,
        entry: &IndexCatalogEntry,
    ) -> Result<Option<IndexDefinition>> {
        let columns = resolve_columns(&self.catalog, entry).await?;

        if columns.is_empty() {
            return Ok(None);
        }

        let operator_class_overrides = if self.config.resolve_operator_classes {
            resolve_operator_classes(&self.catalog, &columns, entry).await?
        } else {
            IndexMap::new()
        };

        Ok(Some(IndexDefinition {
            table: table.to_string(),
            name: entry.name.clone(),
            unique: entry.unique,
            columns,
            lengths: vec![],
            where_predicate: extract_where_clause(&entry.definition),
            using: entry.access_method.clone(),
            operator_class_overrides,
        }))
    }
}
