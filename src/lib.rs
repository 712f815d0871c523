//! inventario - product inventory kept in a comma-delimited text file
//!
//! Each non-blank line of the backing file is one product:
//! `name, price, units, size`. Ids are not stored; a product's id is its
//! 1-based position among the non-blank lines, so deleting a product
//! renumbers everything after it.
//!
//! # Architecture
//!
//! - `config`: Backing file resolution and settings
//! - `error`: Custom error types
//! - `models`: The product record and its edit types
//! - `storage`: Line codec, whole-file load/save and append
//! - `services`: Inventory operations (search, add, update, delete, backup)
//! - `audit`: Audit logging system
//! - `backup`: Timestamped copies of the backing file
//! - `shell`: The interactive numbered menu
//! - `cli`, `display`, `export`: Non-interactive command surface
//!
//! # Example
//!
//! ```rust,ignore
//! use inventario::config::{paths::InventoryPaths, settings::Settings};
//! use inventario::services::InventoryService;
//! use inventario::storage::Storage;
//!
//! let paths = InventoryPaths::new(None)?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings);
//! let products = InventoryService::new(&storage).list()?;
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::InventoryError;
