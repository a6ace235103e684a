//! Port for the invocation audit trail.
//!
//! Every module run produces exactly one [`InvocationRecord`], whatever the
//! outcome. Adapters decide where and how records are persisted; the use
//! case only builds them.

use mcpsim_domain::tool::value_objects::{ModuleResponse, OriginalMessage, ResultPayload};
use serde_json::Value;

/// How a module run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationOutcome {
    /// The engine produced a result
    Simulated,
    /// Check mode answered without consulting the engine
    CheckMode,
    /// The parameters failed validation
    Rejected,
}

impl InvocationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvocationOutcome::Simulated => "simulated",
            InvocationOutcome::CheckMode => "check_mode",
            InvocationOutcome::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for InvocationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit entry for one module run.
///
/// Accepted runs carry the normalized `request`; rejected runs carry the
/// raw `params` as received, since there is no request to echo.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationRecord {
    pub outcome: InvocationOutcome,
    pub request: Option<OriginalMessage>,
    pub params: Option<Value>,
    pub changed: bool,
    pub message: String,
    pub result: ResultPayload,
}

impl InvocationRecord {
    /// Record for a run that produced `response`
    pub fn responded(
        outcome: InvocationOutcome,
        request: OriginalMessage,
        response: &ModuleResponse,
    ) -> Self {
        Self {
            outcome,
            request: Some(request),
            params: None,
            changed: response.changed,
            message: response.message.clone(),
            result: response.result.clone(),
        }
    }

    /// Record for parameters that never became a request
    pub fn rejected(params: Value, error: impl Into<String>) -> Self {
        Self {
            outcome: InvocationOutcome::Rejected,
            request: None,
            params: Some(params),
            changed: false,
            message: error.into(),
            result: ResultPayload::new(),
        }
    }
}

/// Sink for invocation records.
///
/// Infallible by contract: a broken audit trail never changes the response
/// returned to the host.
pub trait AuditLog: Send + Sync {
    fn record(&self, record: &InvocationRecord);
}

/// Audit sink that discards everything
pub struct NoAuditLog;

impl AuditLog for NoAuditLog {
    fn record(&self, _record: &InvocationRecord) {}
}
