//! Simulated tool execution
//!
//! - [`SimulationEngine`]: eligibility gate plus registry dispatch
//! - [`aws`]: the built-in AWS provisioning fixtures

pub mod aws;
mod engine;

pub use aws::aws_handler_registry;
pub use engine::{GENERIC_SUCCESS_MESSAGE, SimulationEngine};
