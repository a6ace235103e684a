//! Console output formatting
//!
//! stdout carries exactly one JSON document per run: the module response,
//! a failure record, or the handler listing.

use mcpsim_domain::{HandlerKey, ModuleResponse};
use serde::Serialize;
use serde_json::json;

/// Formatter for the JSON documents printed to stdout
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a successful module response
    pub fn format_response(response: &ModuleResponse, compact: bool) -> String {
        Self::to_json(response, compact)
    }

    /// Format a failure record (`{"failed": true, "changed": false, "msg": ...}`)
    pub fn format_failure(message: &str, compact: bool) -> String {
        Self::to_json(
            &json!({
                "failed": true,
                "changed": false,
                "msg": message,
            }),
            compact,
        )
    }

    /// Format the registered handler keys as `{"handlers": ["tool.action", ...]}`
    pub fn format_handler_keys(keys: &[HandlerKey], compact: bool) -> String {
        let names: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        Self::to_json(&json!({ "handlers": names }), compact)
    }

    fn to_json<T: Serialize>(value: &T, compact: bool) -> String {
        let formatted = if compact {
            serde_json::to_string(value)
        } else {
            serde_json::to_string_pretty(value)
        };
        formatted.unwrap_or_else(|_| "{}".to_string())
    }
}
