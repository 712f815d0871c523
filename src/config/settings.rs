//! User settings for inventario
//!
//! Settings are optional: a missing settings file means defaults.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::InventoryPaths;
use crate::error::InventoryError;

/// User settings for inventario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// strftime format used when printing modification times
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_audit_enabled() -> bool {
    true
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            audit_enabled: default_audit_enabled(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &InventoryPaths) -> Result<Self, InventoryError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                InventoryError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                InventoryError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            validate_date_format(&settings.date_format)?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &InventoryPaths) -> Result<(), InventoryError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            InventoryError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            InventoryError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

/// Reject strftime strings with specifiers chrono can't render
pub fn validate_date_format(format: &str) -> Result<(), InventoryError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(InventoryError::Config(format!(
            "Invalid date_format '{}' in settings file",
            format
        )));
    }
    Ok(())
}
