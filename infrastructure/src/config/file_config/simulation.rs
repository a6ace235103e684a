//! Simulation configuration from TOML (`[simulation]` section)

use mcpsim_domain::{DEFAULT_ELIGIBLE_REGION, DEFAULT_ELIGIBLE_SERVER, EligibilityRule};
use serde::{Deserialize, Serialize};

/// Raw simulation configuration from TOML
///
/// ```toml
/// [simulation]
/// server_name = "ansible"
/// region = "us-east-1"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSimulationConfig {
    /// Server name that receives tool-specific fixtures
    pub server_name: String,
    /// Region that receives tool-specific fixtures
    pub region: String,
}

impl Default for FileSimulationConfig {
    fn default() -> Self {
        Self {
            server_name: DEFAULT_ELIGIBLE_SERVER.to_string(),
            region: DEFAULT_ELIGIBLE_REGION.to_string(),
        }
    }
}

impl FileSimulationConfig {
    pub fn to_rule(&self) -> EligibilityRule {
        EligibilityRule::new(&self.server_name, &self.region)
    }
}
