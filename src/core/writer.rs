use crate::core::Storage;
use crate::domain::model::GroupedCatalog;
use crate::utils::error::Result;

/// Indented JSON for the grouped catalog.
pub fn render_catalog(catalog: &GroupedCatalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

pub async fn write_catalog<S: Storage>(
    storage: &S,
    catalog: &GroupedCatalog,
    path: &str,
) -> Result<()> {
    tracing::info!("Saving grouped products to JSON file...");

    let json = render_catalog(catalog)?;
    tracing::debug!("Writing {} bytes to {}", json.len(), path);
    storage.write_file(path, json.as_bytes()).await
}
