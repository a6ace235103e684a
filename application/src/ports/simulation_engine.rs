//! Simulation engine port
//!
//! Defines the interface for turning a normalized [`ToolRequest`] into a
//! simulated [`ToolResult`].

use mcpsim_domain::tool::{
    entities::{HandlerKey, ToolRequest},
    value_objects::ToolResult,
};

/// Port for simulated tool execution
///
/// This port defines how the application layer obtains fixture results.
/// Implementations (adapters) live in the infrastructure layer.
///
/// `simulate` is infallible: an unknown tool or action degrades to a
/// generic success result rather than an error.
pub trait SimulationEnginePort: Send + Sync {
    /// Simulate one tool call
    fn simulate(&self, request: &ToolRequest) -> ToolResult;

    /// Keys of all tool-specific handlers, sorted
    fn handler_keys(&self) -> Vec<HandlerKey>;

    /// Check if a tool-specific handler exists for a key
    fn has_handler(&self, key: &HandlerKey) -> bool {
        self.handler_keys().contains(key)
    }
}
