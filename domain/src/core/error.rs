//! Domain error types

use crate::tool::entities::HandlerKey;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed module input (missing field, wrong `arguments` type).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Two handlers claimed the same `(tool_name, action)` pair.
    #[error("Duplicate handler registered for {0}")]
    DuplicateHandler(HandlerKey),
}

impl DomainError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        DomainError::InvalidRequest(message.into())
    }

    /// Check if this error was caused by the caller's input
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, DomainError::InvalidRequest(_))
    }
}
