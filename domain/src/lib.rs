//! Domain layer for use-mcp-tool
//!
//! This crate contains the entities and value objects of a simulated MCP
//! tool invocation, plus the pure pieces of the simulation model.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tool invocation
//!
//! A host (a playbook runner, a pipeline) asks a named server to run a tool
//! with an argument mapping. The request is normalized into a
//! [`ToolRequest`] and answered with a [`ToolResult`]; the host receives a
//! [`ModuleResponse`] that also echoes the request.
//!
//! ## Simulation
//!
//! Nothing real is provisioned. An [`EligibilityRule`] decides whether a
//! request gets tool-specific fixtures, and a [`HandlerRegistry`] maps each
//! [`HandlerKey`] `(tool_name, action)` to the [`ActionHandler`] that
//! synthesizes them.

pub mod core;
pub mod simulation;
pub mod tool;

// Re-export commonly used types
pub use core::error::DomainError;
pub use simulation::{
    ActionHandler, DEFAULT_ELIGIBLE_REGION, DEFAULT_ELIGIBLE_SERVER, EligibilityRule,
    HandlerOutput, HandlerRegistry,
};
pub use tool::{
    HandlerKey, ModuleResponse, OriginalMessage, ResultPayload, SimulationContext, ToolArguments,
    ToolRequest, ToolResult,
};
