//! Application layer for use-mcp-tool
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    audit_log::{AuditLog, InvocationOutcome, InvocationRecord, NoAuditLog},
    simulation_engine::SimulationEnginePort,
};
pub use use_cases::invoke_tool::{InvokeToolError, InvokeToolInput, InvokeToolUseCase};
pub use use_cases::normalize_request::normalize_request;
