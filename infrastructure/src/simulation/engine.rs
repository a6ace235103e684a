//! Simulation engine: the concrete implementation of [`SimulationEnginePort`].
//!
//! # Dispatch
//!
//! ```text
//! SimulationEngine::simulate(request)
//!   ├─ rule.is_eligible(request)?  no  → "Operation simulated successfully"
//!   └─ yes → registry.get((tool_name, action))
//!        ├─ Some(handler) → handler.handle(ctx)
//!        └─ None          → "Operation {tool}.{action} simulated successfully"
//! ```
//!
//! Every branch yields `changed: true`. The engine holds no mutable state,
//! so one instance can serve any number of callers.

use mcpsim_application::ports::simulation_engine::SimulationEnginePort;
use mcpsim_domain::{
    DomainError, EligibilityRule, HandlerKey, HandlerRegistry, SimulationContext, ToolRequest,
    ToolResult,
};
use std::sync::Arc;
use tracing::debug;

/// Message for requests outside the eligible server/region
pub const GENERIC_SUCCESS_MESSAGE: &str = "Operation simulated successfully";

/// Fixture engine dispatching on [`HandlerKey`].
///
/// | Constructor | Handlers | Eligibility |
/// |-------------|----------|-------------|
/// | [`new()`](Self::new) | any [`HandlerRegistry`] | any [`EligibilityRule`] |
/// | [`with_aws_fixtures()`](Self::with_aws_fixtures) | AWS fixtures | any [`EligibilityRule`] |
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    rule: EligibilityRule,
    registry: Arc<HandlerRegistry>,
}

impl SimulationEngine {
    pub fn new(rule: EligibilityRule, registry: HandlerRegistry) -> Self {
        Self {
            rule,
            registry: Arc::new(registry),
        }
    }

    /// Engine backed by the built-in AWS fixture handlers
    pub fn with_aws_fixtures(rule: EligibilityRule) -> Result<Self, DomainError> {
        Ok(Self::new(rule, super::aws::aws_handler_registry()?))
    }

    pub fn rule(&self) -> &EligibilityRule {
        &self.rule
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    fn unregistered_message(key: &HandlerKey) -> String {
        format!("Operation {} simulated successfully", key)
    }
}

impl SimulationEnginePort for SimulationEngine {
    fn simulate(&self, request: &ToolRequest) -> ToolResult {
        if !self.rule.is_eligible(request) {
            debug!(
                server = request.server_name(),
                region = request.region().unwrap_or_default(),
                "Request outside eligible server/region, using generic result"
            );
            return ToolResult::status_success(GENERIC_SUCCESS_MESSAGE);
        }

        let key = HandlerKey::for_request(request);
        match self.registry.get(&key) {
            Some(handler) => {
                debug!(handler = %key, "Dispatching to registered handler");
                let output = handler.handle(&SimulationContext::new(request));
                ToolResult::simulated(output.message, output.result)
            }
            None => {
                debug!(handler = %key, "No handler registered, using generic result");
                ToolResult::status_success(Self::unregistered_message(&key))
            }
        }
    }

    fn handler_keys(&self) -> Vec<HandlerKey> {
        self.registry.keys().into_iter().cloned().collect()
    }

    fn has_handler(&self, key: &HandlerKey) -> bool {
        self.registry.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpsim_domain::HandlerOutput;
    use serde_json::{Value, json};

    fn engine() -> SimulationEngine {
        SimulationEngine::with_aws_fixtures(EligibilityRule::default()).unwrap()
    }

    fn request(server: &str, tool: &str, arguments: Value) -> ToolRequest {
        ToolRequest::try_new(server, tool, arguments.as_object().cloned().unwrap()).unwrap()
    }

    fn status_success() -> Value {
        json!({"status": "success"})
    }

    #[test]
    fn test_vpc_scenario() {
        let result = engine().simulate(&request(
            "ansible",
            "aws_vpc",
            json!({"action": "create", "region": "us-east-1", "cidrBlock": "10.0.0.0/16"}),
        ));

        assert!(result.changed);
        assert_eq!(result.message, "VPC created successfully");
        assert_eq!(result.get_string("vpcId"), Some("vpc-12345678"));
        assert_eq!(result.get_string("cidrBlock"), Some("10.0.0.0/16"));
        assert_eq!(result.get_string("state"), Some("available"));
    }

    #[test]
    fn test_rds_scenario() {
        let result = engine().simulate(&request(
            "ansible",
            "aws_rds",
            json!({"action": "create_db_cluster", "region": "us-east-1", "dbClusterIdentifier": "mydb"}),
        ));

        assert_eq!(result.message, "RDS cluster created successfully");
        assert_eq!(
            result.get_string("endpoint"),
            Some("mydb.cluster-123456789012.us-east-1.rds.amazonaws.com")
        );
        assert_eq!(
            result.get_string("readerEndpoint"),
            Some("mydb.cluster-ro-123456789012.us-east-1.rds.amazonaws.com")
        );
    }

    #[test]
    fn test_ineligible_server_scenario() {
        let result = engine().simulate(&request("other", "aws_vpc", json!({"action": "create"})));

        assert!(result.changed);
        assert_eq!(result.message, "Operation simulated successfully");
        assert_eq!(Value::Object(result.result), status_success());
    }

    #[test]
    fn test_ineligible_ignores_tool_and_action() {
        let engine = engine();
        let cases = [
            ("ansible", "aws_vpc", json!({"action": "create", "region": "eu-west-1"})),
            ("ansible", "aws_rds", json!({"action": "create_db_cluster"})),
            ("terraform", "aws_ec2", json!({"action": "create", "region": "us-east-1"})),
            ("other", "anything", json!({})),
        ];

        for (server, tool, arguments) in cases {
            let result = engine.simulate(&request(server, tool, arguments));
            assert_eq!(result.message, GENERIC_SUCCESS_MESSAGE);
            assert_eq!(Value::Object(result.result), status_success());
        }
    }

    #[test]
    fn test_eligible_unregistered_action() {
        let result = engine().simulate(&request(
            "ansible",
            "aws_vpc",
            json!({"action": "delete", "region": "us-east-1"}),
        ));

        assert!(result.changed);
        assert_eq!(result.message, "Operation aws_vpc.delete simulated successfully");
        assert_eq!(Value::Object(result.result), status_success());
    }

    #[test]
    fn test_eligible_missing_action_uses_empty_action() {
        let result = engine().simulate(&request(
            "ansible",
            "aws_s3",
            json!({"region": "us-east-1"}),
        ));

        assert_eq!(result.message, "Operation aws_s3. simulated successfully");
    }

    #[test]
    fn test_non_string_action_appears_in_message() {
        let result = engine().simulate(&request(
            "ansible",
            "aws_vpc",
            json!({"action": 42, "region": "us-east-1"}),
        ));

        assert_eq!(result.message, "Operation aws_vpc.42 simulated successfully");
        assert_eq!(Value::Object(result.result), status_success());
    }

    #[test]
    fn test_present_arguments_are_echoed_whatever_their_type() {
        let engine = engine();

        let result = engine.simulate(&request(
            "ansible",
            "aws_vpc",
            json!({"action": "create", "region": "us-east-1", "cidrBlock": null}),
        ));
        assert_eq!(result.result["cidrBlock"], Value::Null);

        let result = engine.simulate(&request(
            "ansible",
            "aws_ec2",
            json!({"action": "create", "region": "us-east-1", "instanceType": 5}),
        ));
        assert_eq!(result.result["instances"][0]["instanceType"], 5);
    }

    #[test]
    fn test_every_fixture_reports_change_with_message() {
        let engine = engine();
        for key in engine.handler_keys() {
            let result = engine.simulate(&request(
                "ansible",
                &key.tool_name,
                json!({"action": key.action, "region": "us-east-1"}),
            ));
            assert!(result.changed, "{} should report a change", key);
            assert!(!result.message.is_empty(), "{} should have a message", key);
            assert_ne!(Value::Object(result.result), status_success());
        }
    }

    #[test]
    fn test_simulate_is_idempotent() {
        let engine = engine();
        let request = request(
            "ansible",
            "aws_ec2",
            json!({"action": "create", "region": "us-east-1", "instanceType": "t3.large"}),
        );

        let first = serde_json::to_string(&engine.simulate(&request)).unwrap();
        let second = serde_json::to_string(&engine.simulate(&request)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_new_handler_needs_only_registration() {
        fn create_bucket(ctx: &SimulationContext<'_>) -> HandlerOutput {
            HandlerOutput::new("Bucket created successfully")
                .with_field("bucket", ctx.value_or("bucket", "default"))
        }

        let registry = crate::simulation::aws::aws_handler_registry()
            .and_then(|r| r.register(HandlerKey::new("aws_s3", "create_bucket"), create_bucket))
            .unwrap();
        let engine = SimulationEngine::new(EligibilityRule::default(), registry);

        let result = engine.simulate(&request(
            "ansible",
            "aws_s3",
            json!({"action": "create_bucket", "region": "us-east-1", "bucket": "assets"}),
        ));

        assert_eq!(result.message, "Bucket created successfully");
        assert_eq!(result.get_string("bucket"), Some("assets"));
        assert!(engine.has_handler(&HandlerKey::new("aws_s3", "create_bucket")));
    }

    #[test]
    fn test_custom_rule_changes_eligibility() {
        let engine =
            SimulationEngine::with_aws_fixtures(EligibilityRule::new("localstack", "eu-west-1"))
                .unwrap();

        let result = engine.simulate(&request(
            "localstack",
            "aws_vpc",
            json!({"action": "create", "region": "eu-west-1"}),
        ));
        assert_eq!(result.message, "VPC created successfully");

        let result = engine.simulate(&request(
            "ansible",
            "aws_vpc",
            json!({"action": "create", "region": "us-east-1"}),
        ));
        assert_eq!(result.message, GENERIC_SUCCESS_MESSAGE);
    }

    #[test]
    fn test_invoke_tool_end_to_end() {
        use mcpsim_application::{InvokeToolInput, InvokeToolUseCase};

        let use_case = InvokeToolUseCase::new(Arc::new(engine()));
        let params = json!({
            "server_name": "ansible",
            "tool_name": "aws_vpc",
            "arguments": {"action": "create", "region": "us-east-1", "cidrBlock": "10.0.0.0/16", "name": "my-vpc"}
        });

        let response = use_case.execute(InvokeToolInput::new(params.clone())).unwrap();
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["changed"], true);
        assert_eq!(value["message"], "VPC created successfully");
        assert_eq!(value["result"]["vpcId"], "vpc-12345678");
        assert_eq!(value["original_message"], params);
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine = Arc::new(engine());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = engine.clone();
                std::thread::spawn(move || {
                    engine
                        .simulate(&request(
                            "ansible",
                            "aws_efs",
                            json!({"action": "create_file_system", "region": "us-east-1"}),
                        ))
                        .message
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "EFS file system created successfully");
        }
    }
}
