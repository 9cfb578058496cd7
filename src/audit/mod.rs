//! Audit logging for Purse
//!
//! Every successful mutation (registration, transaction, budget change,
//! transfer) is appended to a JSONL audit log together with the login of
//! the session that made it.
//!
//! - `AuditEntry`: one record with timestamp, operation, entity and
//!   before/after values.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//! - `generate_diff`: short summary of what changed in an update.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
