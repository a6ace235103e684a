//! EC2 fixtures: aws_ec2.create_security_group, aws_ec2.create

use mcpsim_domain::{HandlerOutput, SimulationContext};
use serde_json::json;

/// Tool name
pub const AWS_EC2: &str = "aws_ec2";

/// Action names
pub const CREATE_SECURITY_GROUP: &str = "create_security_group";
pub const CREATE: &str = "create";

pub const GROUP_ID: &str = "sg-12345678";
pub const INSTANCE_ID: &str = "i-12345678";
const PRIVATE_IP_ADDRESS: &str = "10.0.1.10";
// Fixture value; not a valid IPv4 address.
const PUBLIC_IP_ADDRESS: &str = "54.123.456.789";
const DEFAULT_INSTANCE_TYPE: &str = "t3.micro";

/// Simulate `aws_ec2.create_security_group`
pub fn create_security_group(ctx: &SimulationContext<'_>) -> HandlerOutput {
    HandlerOutput::new("Security group created successfully")
        .with_field("groupId", GROUP_ID)
        .with_field("groupName", ctx.value_or("groupName", "default"))
        .with_field("description", ctx.value_or("description", ""))
}

/// Simulate `aws_ec2.create` (a single instance)
pub fn create_instance(ctx: &SimulationContext<'_>) -> HandlerOutput {
    let instance = json!({
        "instanceId": INSTANCE_ID,
        "instanceType": ctx.value_or("instanceType", DEFAULT_INSTANCE_TYPE),
        "privateIpAddress": PRIVATE_IP_ADDRESS,
        "publicIpAddress": PUBLIC_IP_ADDRESS,
    });

    HandlerOutput::new("EC2 instance created successfully").with_field("instances", json!([instance]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpsim_domain::ToolRequest;

    fn request(arguments: serde_json::Value) -> ToolRequest {
        ToolRequest::try_new("ansible", AWS_EC2, arguments.as_object().cloned().unwrap()).unwrap()
    }

    #[test]
    fn test_security_group_defaults() {
        let request = request(json!({"action": CREATE_SECURITY_GROUP}));
        let output = create_security_group(&SimulationContext::new(&request));

        assert_eq!(output.message, "Security group created successfully");
        assert_eq!(output.result["groupId"], "sg-12345678");
        assert_eq!(output.result["groupName"], "default");
        assert_eq!(output.result["description"], "");
    }

    #[test]
    fn test_security_group_uses_arguments() {
        let request = request(json!({
            "action": CREATE_SECURITY_GROUP,
            "groupName": "lamp-web",
            "description": "HTTP from anywhere"
        }));
        let output = create_security_group(&SimulationContext::new(&request));

        assert_eq!(output.result["groupName"], "lamp-web");
        assert_eq!(output.result["description"], "HTTP from anywhere");
    }

    #[test]
    fn test_create_instance_is_single_element_list() {
        let request = request(json!({"action": CREATE, "instanceType": "m5.large"}));
        let output = create_instance(&SimulationContext::new(&request));

        let instances = output.result["instances"].as_array().unwrap();
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0]["instanceId"], "i-12345678");
        assert_eq!(instances[0]["instanceType"], "m5.large");
        assert_eq!(instances[0]["privateIpAddress"], "10.0.1.10");
        assert_eq!(instances[0]["publicIpAddress"], "54.123.456.789");
    }

    #[test]
    fn test_create_instance_default_type() {
        let request = request(json!({"action": CREATE}));
        let output = create_instance(&SimulationContext::new(&request));
        assert_eq!(output.result["instances"][0]["instanceType"], "t3.micro");
    }

    #[test]
    fn test_non_string_arguments_are_echoed() {
        let instance_request = request(json!({"action": CREATE, "instanceType": 5}));
        let output = create_instance(&SimulationContext::new(&instance_request));
        assert_eq!(output.result["instances"][0]["instanceType"], 5);

        let request = request(json!({
            "action": CREATE_SECURITY_GROUP,
            "groupName": ["web"],
            "description": null
        }));
        let output = create_security_group(&SimulationContext::new(&request));
        assert_eq!(output.result["groupName"], json!(["web"]));
        assert!(output.result["description"].is_null());
    }
}
