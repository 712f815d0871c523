//! Service layer for inventario
//!
//! The service layer implements the inventory operations on top of the
//! storage layer. Both the interactive shell and the subcommands go through it.

pub mod inventory;

pub use inventory::{parse_id, InventoryService, SearchQuery};
