//! Request normalization.
//!
//! Validates the raw module parameters (`server_name`, `tool_name`,
//! `arguments`) and flattens them into a [`ToolRequest`]. Pure validation:
//! no side effects, no defaults applied to the arguments themselves.

use mcpsim_domain::DomainError;
use mcpsim_domain::tool::entities::{ToolArguments, ToolRequest};
use serde_json::Value;

pub const SERVER_NAME: &str = "server_name";
pub const TOOL_NAME: &str = "tool_name";
pub const ARGUMENTS: &str = "arguments";

/// Normalize raw module parameters into a [`ToolRequest`].
///
/// Fails with [`DomainError::InvalidRequest`] when the parameters are not a
/// JSON object, when `server_name`/`tool_name` are absent, empty or not
/// strings, or when `arguments` is absent or not a mapping. Other keys are
/// ignored.
pub fn normalize_request(params: &Value) -> Result<ToolRequest, DomainError> {
    let params = params
        .as_object()
        .ok_or_else(|| DomainError::invalid_request("module parameters must be a JSON object"))?;

    let server_name = require_name(params, SERVER_NAME)?;
    let tool_name = require_name(params, TOOL_NAME)?;
    let arguments = require_arguments(params)?;

    ToolRequest::try_new(server_name, tool_name, arguments)
}

fn require_name<'a>(params: &'a ToolArguments, key: &str) -> Result<&'a str, DomainError> {
    match params.get(key) {
        None | Some(Value::Null) => Err(DomainError::invalid_request(format!(
            "missing required argument: {}",
            key
        ))),
        Some(Value::String(s)) if s.is_empty() => Err(DomainError::invalid_request(format!(
            "{} must not be empty",
            key
        ))),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(DomainError::invalid_request(format!(
            "{} must be a string",
            key
        ))),
    }
}

fn require_arguments(params: &ToolArguments) -> Result<ToolArguments, DomainError> {
    match params.get(ARGUMENTS) {
        None | Some(Value::Null) => Err(DomainError::invalid_request(format!(
            "missing required argument: {}",
            ARGUMENTS
        ))),
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(_) => Err(DomainError::invalid_request(format!(
            "{} must be a mapping",
            ARGUMENTS
        ))),
    }
}
