//! YAML Export functionality

use crate::error::{InventoryError, InventoryResult};
use crate::export::json::InventoryExport;
use crate::storage::Storage;
use std::io::Write;

/// Export the inventory to YAML with a short header comment
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> InventoryResult<()> {
    let export = InventoryExport::from_storage(storage)?;

    let header = format!(
        "# inventario export\n# Generated: {}\n# Source: {}\n\n",
        export.exported_at, export.source
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| InventoryError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)?;

    Ok(())
}
