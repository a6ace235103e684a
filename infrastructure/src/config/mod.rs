//! Configuration file loading for use-mcp-tool
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./mcpsim.toml` or `./.mcpsim.toml`
//! 3. Global: `$XDG_CONFIG_HOME/use-mcp-tool/config.toml`
//! 4. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileLoggingConfig, FileOutputConfig, FileSimulationConfig, Severity,
};
pub use loader::ConfigLoader;
