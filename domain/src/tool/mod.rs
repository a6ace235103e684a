//! Tool domain module
//!
//! This module defines what a simulated tool invocation looks like on the
//! way in and on the way out.
//!
//! ```text
//! ┌──────────────┐    ┌───────────────────┐    ┌──────────────┐
//! │ ToolRequest  │───▶│ SimulationContext │───▶│ ToolResult   │
//! │ (normalized) │    │ (handler's view)  │    │ (engine out) │
//! └──────────────┘    └───────────────────┘    └──────┬───────┘
//!                                                     │
//!                                                     ▼
//!                                              ┌──────────────┐
//!                                              │ModuleResponse│
//!                                              │ (host out)   │
//!                                              └──────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`ToolRequest`]: `(server_name, tool_name, arguments)`, immutable
//! - [`HandlerKey`]: `(tool_name, action)` used to pick a handler
//! - [`SimulationContext`]: defaulted, typed reads over the arguments
//! - [`ToolResult`]: `{changed, message, result}`
//! - [`ModuleResponse`]: `ToolResult` plus the `original_message` echo

pub mod context;
pub mod entities;
pub mod value_objects;

pub use context::SimulationContext;
pub use entities::{HandlerKey, ToolArguments, ToolRequest};
pub use value_objects::{ModuleResponse, OriginalMessage, ResultPayload, ToolResult};
