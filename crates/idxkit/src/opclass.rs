use idxkit_core::{schema::IndexCatalogEntry, Catalog, Result};
use indexmap::IndexMap;
use log::debug;

/// Looks up the operator class of each key and returns the ones that are
/// not the default for their column type, keyed by column.
///
/// Column `i` is paired with the `i`-th operator class of the entry. Columns
/// without an operator class, or whose class is not in the catalog,
/// contribute nothing.
pub async fn resolve_operator_classes(
    catalog: &impl Catalog,
    columns: &[String],
    entry: &IndexCatalogEntry,
) -> Result<IndexMap<String, String>> {
    let mut overrides = IndexMap::new();

    for (column, oid) in columns.iter().zip(&entry.operator_class_oids) {
        let Some(class) = catalog.operator_class(*oid).await? else {
            debug!("operator class not found; index={} oid={}", entry.name, oid);
            continue;
        };

        if !class.is_default {
            overrides.insert(column.clone(), class.name);
        }
    }

    Ok(overrides)
}
