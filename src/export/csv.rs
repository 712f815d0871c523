//! CSV Export functionality
//!
//! Unlike the backing file, the CSV output quotes fields properly, so names
//! containing commas survive a round trip through a spreadsheet.

use crate::error::{InventoryError, InventoryResult};
use crate::storage::Storage;
use std::io::Write;

/// Export all products to CSV with a header row
pub fn export_products_csv<W: Write>(storage: &Storage, writer: &mut W) -> InventoryResult<usize> {
    let products = storage.inventory.load()?;
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Name", "Price", "Units", "Size"])
        .map_err(|e| InventoryError::Export(e.to_string()))?;

    for product in &products {
        let id = product.id.to_string();
        csv_writer
            .write_record([
                id.as_str(),
                product.name.as_str(),
                product.price.as_str(),
                product.units.as_str(),
                product.size.as_str(),
            ])
            .map_err(|e| InventoryError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| InventoryError::Export(e.to_string()))?;

    Ok(products.len())
}
