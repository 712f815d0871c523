//! Backup manager for inventario
//!
//! A backup is a byte-for-byte copy of the backing file placed beside it as
//! `<stem>_backup_<YYYYMMDD_HHMMSS><ext>`. Two backups within the same second
//! share a name and the later one overwrites the earlier.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::{InventoryError, InventoryResult};

/// Timestamp format embedded in backup filenames
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Marker between the source stem and the timestamp
const BACKUP_MARKER: &str = "_backup_";

/// Metadata about a backup
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was created (local time, from the filename)
    pub created_at: NaiveDateTime,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Creates and lists backups of one backing file
pub struct BackupManager {
    /// File being backed up
    source: PathBuf,
}

impl BackupManager {
    /// Create a new BackupManager for the given backing file
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Copy the backing file to a timestamped sibling
    ///
    /// Returns `None` without creating anything if the source doesn't exist.
    /// Permissions and modification time are carried over to the copy.
    pub fn create_backup(&self) -> InventoryResult<Option<PathBuf>> {
        if !self.source.exists() {
            return Ok(None);
        }

        let backup_path = self.backup_path_for(Local::now().naive_local());

        fs::copy(&self.source, &backup_path).map_err(|e| {
            InventoryError::Io(format!(
                "Failed to copy {} to {}: {}",
                self.source.display(),
                backup_path.display(),
                e
            ))
        })?;

        self.copy_modified_time(&backup_path)?;

        Ok(Some(backup_path))
    }

    /// Backup path for a given timestamp
    pub fn backup_path_for(&self, timestamp: NaiveDateTime) -> PathBuf {
        let (stem, ext) = self.stem_and_extension();
        let filename = format!(
            "{}{}{}{}",
            stem,
            BACKUP_MARKER,
            timestamp.format(BACKUP_TIMESTAMP_FORMAT),
            ext
        );
        self.backup_dir().join(filename)
    }

    /// Directory that holds the source and its backups
    pub fn backup_dir(&self) -> PathBuf {
        match self.source.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// List all backups of the source, newest first
    pub fn list_backups(&self) -> InventoryResult<Vec<BackupInfo>> {
        let dir = self.backup_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&dir)
            .map_err(|e| InventoryError::Io(format!("Failed to read backup directory: {}", e)))?
        {
            let entry = entry.map_err(|e| {
                InventoryError::Io(format!("Failed to read directory entry: {}", e))
            })?;

            if let Some(info) = self.parse_backup_info(&entry.path()) {
                backups.push(info);
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(backups)
    }

    /// Parse backup info from a path, if it names a backup of the source
    fn parse_backup_info(&self, path: &Path) -> Option<BackupInfo> {
        let filename = path.file_name()?.to_str()?.to_string();
        let (stem, ext) = self.stem_and_extension();

        let timestamp = filename
            .strip_prefix(stem.as_str())?
            .strip_prefix(BACKUP_MARKER)?
            .strip_suffix(ext.as_str())?;
        let created_at = NaiveDateTime::parse_from_str(timestamp, BACKUP_TIMESTAMP_FORMAT).ok()?;

        let metadata = fs::metadata(path).ok()?;
        if !metadata.is_file() {
            return None;
        }

        Some(BackupInfo {
            filename,
            path: path.to_path_buf(),
            created_at,
            size_bytes: metadata.len(),
        })
    }

    /// Source stem and extension (with its leading dot, or empty)
    fn stem_and_extension(&self) -> (String, String) {
        let stem = self
            .source
            .file_stem()
            .map(OsStr::to_string_lossy)
            .unwrap_or_default()
            .to_string();
        let ext = self
            .source
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        (stem, ext)
    }

    fn copy_modified_time(&self, backup_path: &Path) -> InventoryResult<()> {
        let modified = fs::metadata(&self.source)
            .and_then(|m| m.modified())
            .map_err(|e| InventoryError::Io(format!("Failed to read source metadata: {}", e)))?;

        File::options()
            .write(true)
            .open(backup_path)
            .and_then(|f| f.set_modified(modified))
            .map_err(|e| InventoryError::Io(format!("Failed to set backup timestamp: {}", e)))
    }
}
