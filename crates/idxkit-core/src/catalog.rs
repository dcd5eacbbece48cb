use crate::{
    async_trait,
    schema::{IndexCatalogEntry, Oid, OperatorClass},
    Result,
};

use std::{collections::HashMap, fmt::Debug};

/// Read access to the index-related parts of a system catalog.
///
/// Implemented by database drivers and by test fixtures. Every method is a
/// single round trip; failures are returned to the caller unchanged.
#[async_trait]
pub trait Catalog: Debug + Send + Sync {
    /// Lists the non-primary indexes of `table`, ordered by index name.
    async fn index_entries(&self, table: &str) -> Result<Vec<IndexCatalogEntry>>;

    /// Maps attribute numbers of `relation` to column names.
    ///
    /// Attribute numbers without a column are absent from the result.
    async fn column_names(&self, relation: Oid, attnums: &[i16]) -> Result<HashMap<i16, String>>;

    /// Looks up an operator class by identifier.
    async fn operator_class(&self, oid: Oid) -> Result<Option<OperatorClass>>;
}

#[async_trait]
impl<T: Catalog + ?Sized> Catalog for &T {
    async fn index_entries(&self, table: &str) -> Result<Vec<IndexCatalogEntry>> {
        (**self).index_entries(table).await
    }

    async fn column_names(&self, relation: Oid, attnums: &[i16]) -> Result<HashMap<i16, String>> {
        (**self).column_names(relation, attnums).await
    }

    async fn operator_class(&self, oid: Oid) -> Result<Option<OperatorClass>> {
        (**self).operator_class(oid).await
    }
}
