//! Product CLI commands
//!
//! Non-interactive counterparts of the shell's menu options. Not-found
//! conditions print the same messages as the shell and are not errors.

use crate::display::{self, messages};
use crate::error::{InventoryError, InventoryResult};
use crate::models::{ProductInput, ProductPatch};
use crate::services::{parse_id, InventoryService};
use crate::storage::Storage;

/// Parse a product id argument
pub fn parse_product_id(input: &str) -> InventoryResult<usize> {
    parse_id(input.trim()).ok_or_else(|| InventoryError::invalid_id(input))
}

/// Print every product
pub fn handle_list(storage: &Storage) -> InventoryResult<()> {
    let service = InventoryService::new(storage);
    println!("{}", display::format_product_list(&service.list()?));
    Ok(())
}

/// Append one product
pub fn handle_add(storage: &Storage, input: ProductInput) -> InventoryResult<()> {
    let service = InventoryService::new(storage);
    let product = service.add(input)?;
    println!("{}", messages::PRODUCT_ADDED);
    println!("{}", product);
    Ok(())
}

/// Search by id or name fragment
pub fn handle_search(storage: &Storage, term: &str) -> InventoryResult<()> {
    let service = InventoryService::new(storage);
    println!("{}", display::format_search_results(&service.search(term)?));
    Ok(())
}

/// Overwrite the given fields of one product
pub fn handle_update(storage: &Storage, id: &str, patch: ProductPatch) -> InventoryResult<()> {
    let id = parse_product_id(id)?;
    if patch.is_empty() {
        return Err(InventoryError::Validation(
            "Nothing to update: pass at least one of --name, --price, --units, --size".into(),
        ));
    }

    let service = InventoryService::new(storage);
    match service.update(id, &patch)? {
        Some(product) => {
            println!("Producto modificado y guardado.");
            println!("{}", product);
        }
        None => println!("{}", messages::PRODUCT_NOT_FOUND),
    }
    Ok(())
}

/// Delete one product and renumber the rest
pub fn handle_delete(storage: &Storage, id: &str) -> InventoryResult<()> {
    let id = parse_product_id(id)?;
    let service = InventoryService::new(storage);
    match service.delete(id)? {
        Some(_) => println!("{}", messages::PRODUCT_DELETED),
        None => println!("{}", messages::PRODUCT_NOT_FOUND),
    }
    Ok(())
}

/// Print size and modification time of the backing file
pub fn handle_info(storage: &Storage, date_format: &str) -> InventoryResult<()> {
    let service = InventoryService::new(storage);
    match service.file_info()? {
        Some(info) => println!("{}", display::format_file_info(&info, date_format)?),
        None => println!("{}", messages::FILE_NOT_FOUND),
    }
    Ok(())
}
