//! Plain-text file helpers
//!
//! The backing file is always read whole and either rewritten whole or
//! appended to. There is no temp-file rename: a failed write can leave the
//! file truncated.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::InventoryError;

/// Read every line of a text file, returning an empty list if it doesn't exist
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, InventoryError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| InventoryError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| InventoryError::Storage(format!("Failed to read {}: {}", path.display(), e)))
}

/// Truncate the file and write `contents` in full
pub fn write_text<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), InventoryError> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|e| {
        InventoryError::Storage(format!("Failed to create {}: {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes()).map_err(|e| {
        InventoryError::Storage(format!("Failed to write {}: {}", path.display(), e))
    })?;

    writer
        .flush()
        .map_err(|e| InventoryError::Storage(format!("Failed to flush {}: {}", path.display(), e)))
}

/// Append `contents` to the end of the file, creating it if needed
pub fn append_text<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), InventoryError> {
    let path = path.as_ref();

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| InventoryError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    file.write_all(contents.as_bytes()).map_err(|e| {
        InventoryError::Storage(format!("Failed to append to {}: {}", path.display(), e))
    })?;

    file.flush()
        .map_err(|e| InventoryError::Storage(format!("Failed to flush {}: {}", path.display(), e)))
}
