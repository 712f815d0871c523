//! Path management for inventario
//!
//! ## Path Resolution Order
//!
//! 1. An explicit path (`--file`, or `INVENTARIO_FILE` through clap)
//! 2. `inventario.txt` in the directory of the running executable
//!
//! Settings and the audit log are sidecar files in the backing file's directory,
//! named after its stem: `stock.txt` gets `stock.config.json` and `stock.audit.log`.

use std::path::{Path, PathBuf};

use crate::error::InventoryError;

/// Default name of the backing file
pub const DEFAULT_FILE_NAME: &str = "inventario.txt";

/// Environment variable that overrides the backing file
pub const FILE_ENV_VAR: &str = "INVENTARIO_FILE";

/// Manages all paths used by inventario
#[derive(Debug, Clone)]
pub struct InventoryPaths {
    /// The backing file
    data_file: PathBuf,
}

impl InventoryPaths {
    /// Resolve paths, preferring an explicit backing file
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the executable's location
    /// cannot be determined.
    pub fn new(data_file: Option<PathBuf>) -> Result<Self, InventoryError> {
        let data_file = match data_file {
            Some(path) => path,
            None => resolve_default_path()?,
        };

        Ok(Self { data_file })
    }

    /// Create InventoryPaths for a specific backing file (useful for testing)
    pub fn with_data_file(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    /// Get the backing file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Directory holding the backing file, its backups and sidecars
    pub fn base_dir(&self) -> PathBuf {
        match self.data_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Settings sidecar: `<stem>.config.json` beside the backing file
    pub fn settings_file(&self) -> PathBuf {
        self.sidecar("config.json")
    }

    /// Audit log sidecar: `<stem>.audit.log` beside the backing file
    pub fn audit_log(&self) -> PathBuf {
        self.sidecar("audit.log")
    }

    fn sidecar(&self, suffix: &str) -> PathBuf {
        let stem = self
            .data_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "inventario".to_string());
        self.base_dir().join(format!("{}.{}", stem, suffix))
    }

    /// Ensure the directory holding the backing file exists
    pub fn ensure_directories(&self) -> Result<(), InventoryError> {
        std::fs::create_dir_all(self.base_dir())
            .map_err(|e| InventoryError::Io(format!("Failed to create data directory: {}", e)))
    }
}

/// `inventario.txt` next to the running executable
fn resolve_default_path() -> Result<PathBuf, InventoryError> {
    let exe = std::env::current_exe()
        .map_err(|e| InventoryError::Config(format!("Could not locate executable: {}", e)))?;

    let dir = exe
        .parent()
        .ok_or_else(|| InventoryError::Config("Executable has no parent directory".into()))?;

    Ok(dir.join(DEFAULT_FILE_NAME))
}
