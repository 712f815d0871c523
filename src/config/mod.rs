//! Configuration module for inventario
//!
//! This module provides configuration management including:
//! - Backing file and sidecar path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::InventoryPaths;
pub use settings::Settings;
