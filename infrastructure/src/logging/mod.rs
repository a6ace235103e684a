//! Audit trail adapters
//!
//! [`JsonlAuditLog`] implements the [`AuditLog`](mcpsim_application::AuditLog)
//! port as an append-only JSONL file.

mod jsonl_audit_log;

pub use jsonl_audit_log::JsonlAuditLog;
