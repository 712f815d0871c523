//! Display formatting for terminal output
//!
//! The interactive shell and the subcommands print the same messages, so they
//! are kept here rather than in either caller.

pub mod backup;
pub mod product;

pub use backup::{format_backup_list, format_size};
pub use product::{format_file_info, format_product_list, format_search_results};

/// User-facing messages
pub mod messages {
    pub const EMPTY_INVENTORY: &str = "Inventario vacío.";
    pub const NO_RESULTS: &str = "No se encontraron productos.";
    pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado.";
    pub const INVALID_ID: &str = "ID inválido.";
    pub const PRODUCT_ADDED: &str = "Producto agregado (append).";
    pub const PRODUCT_DELETED: &str = "Producto eliminado y archivo actualizado.";
    pub const NOTHING_TO_BACK_UP: &str = "No existe el archivo a respaldar.";
    pub const FILE_NOT_FOUND: &str = "Archivo no encontrado.";
    pub const INVALID_OPTION: &str = "Opción no válida.";
}
