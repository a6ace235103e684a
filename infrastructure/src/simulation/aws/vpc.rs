//! VPC fixtures: aws_vpc.create

use mcpsim_domain::{HandlerOutput, SimulationContext};

/// Tool name
pub const AWS_VPC: &str = "aws_vpc";

/// Action names
pub const CREATE: &str = "create";

pub const VPC_ID: &str = "vpc-12345678";
const DEFAULT_CIDR_BLOCK: &str = "10.0.0.0/16";

/// Simulate `aws_vpc.create`
pub fn create_vpc(ctx: &SimulationContext<'_>) -> HandlerOutput {
    HandlerOutput::new("VPC created successfully")
        .with_field("vpcId", VPC_ID)
        .with_field("cidrBlock", ctx.value_or("cidrBlock", DEFAULT_CIDR_BLOCK))
        .with_field("state", "available")
}
