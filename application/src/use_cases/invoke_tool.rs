//! Invoke Tool use case.
//!
//! The full module run: normalize the parameters, honor check mode, ask the
//! simulation engine for a result and wrap it in a [`ModuleResponse`] that
//! echoes the request back to the host.

use crate::ports::audit_log::{AuditLog, InvocationOutcome, InvocationRecord, NoAuditLog};
use crate::ports::simulation_engine::SimulationEnginePort;
use crate::use_cases::normalize_request::normalize_request;
use mcpsim_domain::DomainError;
use mcpsim_domain::tool::entities::ToolRequest;
use mcpsim_domain::tool::value_objects::{ModuleResponse, OriginalMessage};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while invoking a tool.
#[derive(Error, Debug)]
pub enum InvokeToolError {
    #[error(transparent)]
    InvalidRequest(#[from] DomainError),
}

/// Input for the [`InvokeToolUseCase`].
#[derive(Debug, Clone)]
pub struct InvokeToolInput {
    /// Raw module parameters (`server_name`, `tool_name`, `arguments`).
    pub params: Value,
    /// Host dry-run flag. The engine is never consulted when set.
    pub check_mode: bool,
}

impl InvokeToolInput {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            check_mode: false,
        }
    }

    pub fn with_check_mode(mut self, check_mode: bool) -> Self {
        self.check_mode = check_mode;
        self
    }
}

/// Use case for one simulated tool invocation.
///
/// 1. Normalize parameters into a [`ToolRequest`] (fails on malformed input)
/// 2. In check mode, return [`ModuleResponse::unchanged`] without touching the engine
/// 3. Otherwise simulate and echo the request as `original_message`
#[derive(Clone)]
pub struct InvokeToolUseCase {
    engine: Arc<dyn SimulationEnginePort>,
    audit_log: Arc<dyn AuditLog>,
}

impl InvokeToolUseCase {
    pub fn new(engine: Arc<dyn SimulationEnginePort>) -> Self {
        Self {
            engine,
            audit_log: Arc::new(NoAuditLog),
        }
    }

    /// Record every run to the given audit log.
    pub fn with_audit_log(mut self, audit_log: Arc<dyn AuditLog>) -> Self {
        self.audit_log = audit_log;
        self
    }

    pub fn execute(&self, input: InvokeToolInput) -> Result<ModuleResponse, InvokeToolError> {
        let request = match normalize_request(&input.params) {
            Ok(request) => request,
            Err(e) => {
                self.audit_log
                    .record(&InvocationRecord::rejected(input.params, e.to_string()));
                return Err(e.into());
            }
        };

        if input.check_mode {
            debug!(
                "Check mode: skipping simulation of {}.{}",
                request.tool_name(),
                request.action()
            );
            let response = ModuleResponse::unchanged();
            self.record(InvocationOutcome::CheckMode, &request, &response);
            return Ok(response);
        }

        info!(
            server = request.server_name(),
            tool = request.tool_name(),
            action = %request.action(),
            "Invoking simulated tool"
        );

        let result = self.engine.simulate(&request);
        let response = ModuleResponse::from_result(&request, result);
        self.record(InvocationOutcome::Simulated, &request, &response);

        Ok(response)
    }

    fn record(&self, outcome: InvocationOutcome, request: &ToolRequest, response: &ModuleResponse) {
        self.audit_log.record(&InvocationRecord::responded(
            outcome,
            OriginalMessage::from(request),
            response,
        ));
    }
}
