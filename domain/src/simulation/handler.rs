//! Action handler abstraction
//!
//! A handler turns the arguments of one `(tool_name, action)` pair into a
//! fixture payload. Handlers are pure: no I/O, no state, same input gives
//! the same output.

use crate::tool::context::SimulationContext;
use crate::tool::value_objects::ResultPayload;
use serde_json::Value;

/// What a handler produces: the result payload and its message
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerOutput {
    pub message: String,
    pub result: ResultPayload,
}

impl HandlerOutput {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            result: ResultPayload::new(),
        }
    }

    /// Add a field to the result payload (builder pattern)
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.result.insert(key.into(), value.into());
        self
    }
}

/// Simulation logic for a single handler key.
///
/// Implemented for any `Fn(&SimulationContext) -> HandlerOutput`, so plain
/// functions and closures can be registered directly.
pub trait ActionHandler: Send + Sync {
    fn handle(&self, ctx: &SimulationContext<'_>) -> HandlerOutput;
}

impl<F> ActionHandler for F
where
    F: for<'a, 'b> Fn(&'a SimulationContext<'b>) -> HandlerOutput + Send + Sync,
{
    fn handle(&self, ctx: &SimulationContext<'_>) -> HandlerOutput {
        self(ctx)
    }
}
