//! Tool domain entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Argument mapping passed to a tool (`arguments` module parameter)
pub type ToolArguments = Map<String, Value>;

/// Text form of an argument value: strings as-is, anything else as JSON text
pub fn argument_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

/// A normalized tool invocation request (Value Object)
///
/// Constructed once per invocation by the request normalizer and never
/// mutated afterwards; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRequest {
    server_name: String,
    tool_name: String,
    arguments: ToolArguments,
}

impl ToolRequest {
    /// Create a request, rejecting empty server or tool names
    pub fn try_new(
        server_name: impl Into<String>,
        tool_name: impl Into<String>,
        arguments: ToolArguments,
    ) -> Result<Self, DomainError> {
        let server_name = server_name.into();
        let tool_name = tool_name.into();

        if server_name.is_empty() {
            return Err(DomainError::invalid_request("server_name must not be empty"));
        }
        if tool_name.is_empty() {
            return Err(DomainError::invalid_request("tool_name must not be empty"));
        }

        Ok(Self {
            server_name,
            tool_name,
            arguments,
        })
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn arguments(&self) -> &ToolArguments {
        &self.arguments
    }

    /// Get an argument value as passed, whatever its JSON type
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.arguments.get(key)
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    /// The requested action (`arguments.action`), empty when absent.
    ///
    /// A non-string action is rendered as its JSON text, so `42` reads `"42"`.
    pub fn action(&self) -> Cow<'_, str> {
        self.get("action").map(argument_text).unwrap_or_default()
    }

    /// The requested region (`arguments.region`), if it is a string
    pub fn region(&self) -> Option<&str> {
        self.get_string("region")
    }
}

/// Key selecting simulation logic: `(tool_name, action)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HandlerKey {
    pub tool_name: String,
    pub action: String,
}

impl HandlerKey {
    pub fn new(tool_name: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            action: action.into(),
        }
    }

    /// Key addressed by a request
    pub fn for_request(request: &ToolRequest) -> Self {
        Self::new(request.tool_name(), request.action())
    }
}

impl std::fmt::Display for HandlerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.tool_name, self.action)
    }
}
