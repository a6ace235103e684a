//! Infrastructure layer for use-mcp-tool
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the fixture-backed simulation engine,
//! configuration file loading and the JSONL audit log.

pub mod config;
pub mod logging;
pub mod simulation;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileSimulationConfig, Severity,
};
pub use logging::JsonlAuditLog;
pub use simulation::{GENERIC_SUCCESS_MESSAGE, SimulationEngine, aws_handler_registry};
