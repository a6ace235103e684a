//! Presentation layer for use-mcp-tool
//!
//! This crate contains the CLI definition, module parameter intake and
//! JSON output formatting.

pub mod cli;
pub mod input;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use input::module_args::{ArgsError, CHECK_MODE_KEY, ModuleArgs};
pub use output::console::ConsoleFormatter;
