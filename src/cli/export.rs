//! CLI command for data export

use crate::error::{InventoryError, InventoryResult};
use crate::export::{export_full_json, export_full_yaml, export_products_csv};
use crate::storage::Storage;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per product
    Csv,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

/// Write the inventory to `output` in the given format
pub fn handle_export_command(
    storage: &Storage,
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> InventoryResult<()> {
    let file = File::create(output).map_err(|e| {
        InventoryError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            let count = export_products_csv(storage, &mut writer)?;
            println!("Exported {} products to: {}", count, output.display());
        }
        ExportFormat::Json => {
            export_full_json(storage, &mut writer, pretty)?;
            println!("Inventory exported to: {}", output.display());
        }
        ExportFormat::Yaml => {
            export_full_yaml(storage, &mut writer)?;
            println!("Inventory exported to: {}", output.display());
        }
    }

    writer
        .flush()
        .map_err(|e| InventoryError::Export(e.to_string()))?;

    Ok(())
}
