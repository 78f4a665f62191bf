//! Audit trail for Finanza
//!
//! Every applied change to the budget document is recorded in an append-only
//! JSONL file with its before/after values.
//!
//! - `AuditEntry`: timestamp, operation, affected entity and its values.
//! - `AuditLogger`: appends entries and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
