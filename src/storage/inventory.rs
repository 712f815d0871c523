//! Inventory store over the backing text file
//!
//! Nothing is cached: `load` reads the whole file every time and `save`
//! rewrites it from scratch.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{InventoryError, InventoryResult};
use crate::models::Product;

use super::codec;
use super::file_io::{append_text, read_lines, write_text};

/// Size and modification time of the backing file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Size in bytes
    pub size_bytes: u64,
    /// Last modification time, local timezone
    pub modified: DateTime<Local>,
}

/// Reads and writes products to a single text file
#[derive(Debug, Clone)]
pub struct InventoryStore {
    path: PathBuf,
}

impl InventoryStore {
    /// Create a store for the given backing file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every product, assigning ids 1..n over the non-blank lines
    ///
    /// A missing file is an empty inventory.
    pub fn load(&self) -> InventoryResult<Vec<Product>> {
        let lines = read_lines(&self.path)?;

        Ok(lines
            .iter()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(i, line)| codec::decode(line, i + 1))
            .collect())
    }

    /// Overwrite the backing file with `products`, in order
    pub fn save(&self, products: &[Product]) -> InventoryResult<()> {
        let contents: String = products.iter().map(codec::encode).collect();
        write_text(&self.path, &contents)
    }

    /// Append one product to the end of the file
    ///
    /// Existing lines are neither re-read nor renumbered.
    pub fn append(&self, product: &Product) -> InventoryResult<()> {
        append_text(&self.path, &codec::encode(product))
    }

    /// The id a newly appended product would receive
    pub fn next_id(&self) -> InventoryResult<usize> {
        Ok(self.load()?.len() + 1)
    }

    /// Size and modification time, or `None` if the file doesn't exist
    pub fn file_info(&self) -> InventoryResult<Option<FileInfo>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let metadata = fs::metadata(&self.path).map_err(|e| {
            InventoryError::Storage(format!(
                "Failed to read metadata for {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let modified = metadata.modified().map_err(|e| {
            InventoryError::Storage(format!("Modification time unavailable: {}", e))
        })?;

        Ok(Some(FileInfo {
            size_bytes: metadata.len(),
            modified: DateTime::<Local>::from(modified),
        }))
    }
}
