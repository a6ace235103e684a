//! Load balancer fixtures: aws_elb.create

use mcpsim_domain::{HandlerOutput, SimulationContext};

/// Tool name
pub const AWS_ELB: &str = "aws_elb";

/// Action names
pub const CREATE: &str = "create";

pub const LOAD_BALANCER_ARN: &str = "arn:aws:elasticloadbalancing:us-east-1:123456789012:loadbalancer/app/my-load-balancer/50dc6c495c0c9188";
pub const CANONICAL_HOSTED_ZONE_ID: &str = "Z35SXDOTRQ7X7K";
const DNS_SUFFIX: &str = "us-east-1.elb.amazonaws.com";

/// Simulate `aws_elb.create`
///
/// Only `dnsName` depends on the arguments; the ARN is a fixed fixture even
/// when a different `name` is requested.
pub fn create_load_balancer(ctx: &SimulationContext<'_>) -> HandlerOutput {
    let name = ctx.text_or("name", "default");

    HandlerOutput::new("Load balancer created successfully")
        .with_field("loadBalancerArn", LOAD_BALANCER_ARN)
        .with_field("dnsName", format!("{}.{}", name, DNS_SUFFIX))
        .with_field("canonicalHostedZoneId", CANONICAL_HOSTED_ZONE_ID)
}
