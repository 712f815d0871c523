//! Export module for inventario
//!
//! - CSV: spreadsheet-compatible, one row per product
//! - JSON: machine-readable document with schema version
//! - YAML: the same document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_products_csv;
pub use self::json::{export_full_json, InventoryExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_full_yaml;
