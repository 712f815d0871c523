//! Storage layer for inventario
//!
//! Products live one per line in a comma-delimited text file. `codec` maps
//! lines to products and back, `inventory` loads and rewrites the whole file,
//! and `Storage` ties the store to the audit log.

pub mod codec;
pub mod file_io;
pub mod inventory;

pub use codec::{decode, encode};
pub use inventory::{FileInfo, InventoryStore};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{paths::InventoryPaths, settings::Settings};

/// Main storage coordinator: the backing file plus the optional audit log
pub struct Storage {
    paths: InventoryPaths,
    pub inventory: InventoryStore,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance
    ///
    /// The backing file is not touched; it is created by the first write.
    pub fn new(paths: InventoryPaths, settings: &Settings) -> Self {
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Self {
            inventory: InventoryStore::new(paths.data_file()),
            audit,
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &InventoryPaths {
        &self.paths
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record a create operation
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.log_entry(|| AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update, with a diff of the serialized states
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) {
        self.log_entry(|| {
            let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
                (Ok(b), Ok(a)) => crate::audit::generate_diff(&b, &a),
                _ => None,
            };
            AuditEntry::update(entity_type, entity_id, entity_name, before, after, diff)
        })
    }

    /// Record a delete operation
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.log_entry(|| AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    /// Record a backup of the backing file
    pub fn log_backup(&self, destination: &std::path::Path) {
        self.log_entry(|| {
            AuditEntry::backup(
                self.paths.data_file().display().to_string(),
                destination.display().to_string(),
            )
        })
    }

    /// Append an entry if auditing is on
    ///
    /// The backing file is already written when this runs, so a failed audit
    /// write is reported on stderr instead of failing the operation.
    fn log_entry(&self, build: impl FnOnce() -> AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&build()) {
                eprintln!("Warning: audit log not updated: {}", e);
            }
        }
    }
}
