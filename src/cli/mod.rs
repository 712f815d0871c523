//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod backup;
pub mod export;
pub mod product;

pub use audit::handle_audit_command;
pub use backup::{handle_backup_command, BackupCommands};
pub use export::{handle_export_command, ExportFormat};
pub use product::{
    handle_add, handle_delete, handle_info, handle_list, handle_search, handle_update,
    parse_product_id,
};
