//! Simulation context: a read-only view over a request's arguments
//!
//! Handlers never see the raw [`ToolRequest`]; they read the fields they
//! care about through [`SimulationContext`], supplying a default for each.
//! A default only applies when the field is absent. A present field is
//! echoed as passed, whatever its JSON type, `null` included.

use super::entities::{ToolArguments, ToolRequest, argument_text};
use serde_json::Value;
use std::borrow::Cow;

/// Borrowed view over `ToolRequest.arguments` for one dispatch
#[derive(Debug, Clone, Copy)]
pub struct SimulationContext<'a> {
    request: &'a ToolRequest,
}

impl<'a> SimulationContext<'a> {
    pub fn new(request: &'a ToolRequest) -> Self {
        Self { request }
    }

    /// Requested action, empty string when absent
    pub fn action(&self) -> Cow<'a, str> {
        self.request.action()
    }

    pub fn tool_name(&self) -> &'a str {
        self.request.tool_name()
    }

    pub fn arguments(&self) -> &'a ToolArguments {
        self.request.arguments()
    }

    /// Raw field value, if present
    pub fn value(&self, field: &str) -> Option<&'a Value> {
        self.request.get(field)
    }

    /// Field value as passed, or `default` when absent
    pub fn value_or(&self, field: &str, default: impl Into<Value>) -> Value {
        match self.value(field) {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Field as text for templating into another string, or `default` when
    /// absent. Non-string values render as their JSON text.
    pub fn text_or(&self, field: &str, default: &'a str) -> Cow<'a, str> {
        self.value(field)
            .map(argument_text)
            .unwrap_or(Cow::Borrowed(default))
    }
}
