//! Audit logging system for inventario
//!
//! Records every append, update, delete and backup in an append-only JSONL
//! file beside the backing file.
//!
//! # Architecture
//!
//! - `AuditEntry`: one logged operation with timestamp, entity information and
//!   optional before/after values.
//! - `AuditLogger`: appends entries as JSON lines and reads them back.
//! - `generate_diff`: summarises top-level field changes between two states.
//!
//! # Example
//!
//! ```rust,ignore
//! use inventario::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(
//!     EntityType::Product,
//!     product.id.to_string(),
//!     Some(product.name.clone()),
//!     &product,
//! );
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
