//! Tool domain value objects: immutable result types
//!
//! [`ToolResult`] is what the simulation engine produces. [`ModuleResponse`]
//! is the outbound record handed back to the host, which adds the
//! `original_message` echo of the inbound request.

use super::entities::{ToolArguments, ToolRequest};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Result payload of a simulated tool call
pub type ResultPayload = Map<String, Value>;

/// Outcome of one simulated tool invocation.
///
/// `result` is always a plain JSON object so it can be serialized back to
/// the host without further conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Whether the (simulated) call changed anything
    pub changed: bool,
    /// Human-readable outcome message
    pub message: String,
    /// Synthesized result payload
    pub result: ResultPayload,
}

impl ToolResult {
    /// A simulated change with a handler-specific payload
    pub fn simulated(message: impl Into<String>, result: ResultPayload) -> Self {
        Self {
            changed: true,
            message: message.into(),
            result,
        }
    }

    /// A simulated change whose payload is just `{"status": "success"}`
    pub fn status_success(message: impl Into<String>) -> Self {
        let mut result = ResultPayload::new();
        result.insert("status".to_string(), Value::String("success".to_string()));
        Self::simulated(message, result)
    }

    /// Get a string field from the result payload
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.result.get(key).and_then(|v| v.as_str())
    }
}

/// Echo of the inbound request, included in the response for auditing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginalMessage {
    pub server_name: String,
    pub tool_name: String,
    pub arguments: ToolArguments,
}

impl From<&ToolRequest> for OriginalMessage {
    fn from(request: &ToolRequest) -> Self {
        Self {
            server_name: request.server_name().to_string(),
            tool_name: request.tool_name().to_string(),
            arguments: request.arguments().clone(),
        }
    }
}

/// Outbound record returned to the host.
///
/// In check mode `original_message` is absent and serializes as `{}`,
/// matching the seeded response the host expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleResponse {
    pub changed: bool,
    #[serde(serialize_with = "serialize_original_message")]
    pub original_message: Option<OriginalMessage>,
    pub message: String,
    pub result: ResultPayload,
}

impl ModuleResponse {
    /// Neutral "no change" response used in check mode
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            original_message: None,
            message: String::new(),
            result: ResultPayload::new(),
        }
    }

    /// Wrap an engine result together with the echoed request
    pub fn from_result(request: &ToolRequest, result: ToolResult) -> Self {
        Self {
            changed: result.changed,
            original_message: Some(OriginalMessage::from(request)),
            message: result.message,
            result: result.result,
        }
    }
}

fn serialize_original_message<S: Serializer>(
    value: &Option<OriginalMessage>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(message) => message.serialize(serializer),
        None => Map::<String, Value>::new().serialize(serializer),
    }
}
