//! Simulation domain module
//!
//! Pure building blocks for the dispatch engine:
//!
//! - [`EligibilityRule`]: decides *whether* the handler table is consulted
//! - [`HandlerRegistry`]: decides *which* handler runs, keyed by
//!   [`HandlerKey`](crate::tool::HandlerKey)
//! - [`ActionHandler`]: the fixture logic for one key
//!
//! The dispatch algorithm itself lives in the infrastructure layer
//! (`SimulationEngine`); adding a simulated action only means registering
//! another handler here.

pub mod eligibility;
pub mod handler;
pub mod registry;

pub use eligibility::{DEFAULT_ELIGIBLE_REGION, DEFAULT_ELIGIBLE_SERVER, EligibilityRule};
pub use handler::{ActionHandler, HandlerOutput};
pub use registry::HandlerRegistry;
