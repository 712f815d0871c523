//! Backup system for inventario
//!
//! `BackupManager` copies the backing file to a timestamped sibling in the same
//! directory and can list the copies it made earlier.
//!
//! # Example
//!
//! ```rust,ignore
//! use inventario::backup::BackupManager;
//!
//! let manager = BackupManager::new("inventario.txt");
//! match manager.create_backup()? {
//!     Some(path) => println!("Copia creada en: {}", path.display()),
//!     None => println!("No existe el archivo a respaldar."),
//! }
//! ```

mod manager;

pub use manager::{BackupInfo, BackupManager, BACKUP_TIMESTAMP_FORMAT};
