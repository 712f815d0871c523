//! JSON Export functionality
//!
//! Exports the inventory as a single versioned document.

use crate::error::{InventoryError, InventoryResult};
use crate::models::Product;
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full inventory export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Backing file the products were read from
    pub source: String,

    /// Number of products
    pub product_count: usize,

    /// All products, in file order
    pub products: Vec<Product>,
}

impl InventoryExport {
    /// Build an export from the current contents of the backing file
    pub fn from_storage(storage: &Storage) -> InventoryResult<Self> {
        let products = storage.inventory.load()?;

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            source: storage.inventory.path().display().to_string(),
            product_count: products.len(),
            products,
        })
    }
}

/// Export the inventory to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> InventoryResult<()> {
    let export = InventoryExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)?;
    } else {
        serde_json::to_writer(&mut *writer, &export)?;
    }
    writeln!(writer).map_err(|e| InventoryError::Export(e.to_string()))?;

    Ok(())
}
