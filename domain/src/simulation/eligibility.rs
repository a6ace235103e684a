//! Eligibility rule: which server/region combinations are simulated in detail

use crate::tool::entities::ToolRequest;
use serde::{Deserialize, Serialize};

/// Server name that gets tool-specific simulation by default
pub const DEFAULT_ELIGIBLE_SERVER: &str = "ansible";

/// Region that gets tool-specific simulation by default
pub const DEFAULT_ELIGIBLE_REGION: &str = "us-east-1";

/// Gate deciding whether the handler table is consulted at all.
///
/// A request is eligible when its `server_name` equals [`server_name`](Self::server_name)
/// and its `arguments.region` equals [`region`](Self::region). Anything else
/// receives the generic, tool-agnostic success response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRule {
    pub server_name: String,
    pub region: String,
}

impl EligibilityRule {
    pub fn new(server_name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
            region: region.into(),
        }
    }

    pub fn is_eligible(&self, request: &ToolRequest) -> bool {
        request.server_name() == self.server_name
            && request.region() == Some(self.region.as_str())
    }
}

impl Default for EligibilityRule {
    fn default() -> Self {
        Self::new(DEFAULT_ELIGIBLE_SERVER, DEFAULT_ELIGIBLE_REGION)
    }
}
