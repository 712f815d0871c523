//! Product display formatting

use std::fmt::Write;

use crate::error::{InventoryError, InventoryResult};
use crate::models::Product;
use crate::storage::FileInfo;

use super::messages;

/// Format every product on its own line, or the empty-inventory message
pub fn format_product_list(products: &[Product]) -> String {
    if products.is_empty() {
        return messages::EMPTY_INVENTORY.to_string();
    }
    join_products(products)
}

/// Format search results, or the no-results message
pub fn format_search_results(products: &[Product]) -> String {
    if products.is_empty() {
        return messages::NO_RESULTS.to_string();
    }
    join_products(products)
}

fn join_products(products: &[Product]) -> String {
    products
        .iter()
        .map(Product::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format file size and modification time
///
/// Fails with a config error if `date_format` has a specifier chrono can't render.
pub fn format_file_info(info: &FileInfo, date_format: &str) -> InventoryResult<String> {
    let mut output = format!("Tamaño: {} bytes\nÚltima mod.: ", info.size_bytes);
    write!(output, "{}", info.modified.format(date_format)).map_err(|_| {
        InventoryError::Config(format!("Invalid date_format '{}'", date_format))
    })?;
    Ok(output)
}
