//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod output;
mod simulation;

pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use simulation::FileSimulationConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending field (e.g. `simulation.region`)
    pub field: String,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Eligibility settings
    pub simulation: FileSimulationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Audit log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    ///
    /// Empty eligibility values are legal but mean no request can ever be
    /// eligible, so every call falls back to the generic result.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("simulation.server_name", &self.simulation.server_name),
            ("simulation.region", &self.simulation.region),
        ] {
            if value.is_empty() {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    field: field.to_string(),
                    message: format!(
                        "{} is empty: no request will receive tool-specific fixtures",
                        field
                    ),
                });
            }
        }

        if let Some(path) = &self.logging.audit_log
            && path.trim().is_empty()
        {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                field: "logging.audit_log".to_string(),
                message: "logging.audit_log must be a file path".to_string(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[simulation]
server_name = "localstack"
region = "eu-central-1"

[output]
compact = true

[logging]
audit_log = "audit.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.simulation.server_name, "localstack");
        assert_eq!(config.simulation.region, "eu-central-1");
        assert!(config.output.compact);
        assert_eq!(config.logging.audit_log.as_deref(), Some("audit.jsonl"));
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.simulation.server_name, "ansible");
        assert_eq!(config.simulation.region, "us-east-1");
        assert!(!config.output.compact);
        assert!(config.logging.audit_log.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_empty_values() {
        let mut config = FileConfig::default();
        config.simulation.region = String::new();
        config.logging.audit_log = Some("  ".to_string());

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].field, "simulation.region");
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[1].severity, Severity::Error);
    }
}
