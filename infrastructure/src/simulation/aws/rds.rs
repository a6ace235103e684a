//! RDS fixtures: aws_rds.create_db_cluster

use mcpsim_domain::{HandlerOutput, SimulationContext};

/// Tool name
pub const AWS_RDS: &str = "aws_rds";

/// Action names
pub const CREATE_DB_CLUSTER: &str = "create_db_cluster";

const DEFAULT_CLUSTER_IDENTIFIER: &str = "default";
const ENDPOINT_SUFFIX: &str = "cluster-123456789012.us-east-1.rds.amazonaws.com";
const READER_ENDPOINT_SUFFIX: &str = "cluster-ro-123456789012.us-east-1.rds.amazonaws.com";

/// Writer endpoint for a cluster identifier
pub fn cluster_endpoint(identifier: &str) -> String {
    format!("{}.{}", identifier, ENDPOINT_SUFFIX)
}

/// Reader endpoint for a cluster identifier
pub fn reader_endpoint(identifier: &str) -> String {
    format!("{}.{}", identifier, READER_ENDPOINT_SUFFIX)
}

/// Simulate `aws_rds.create_db_cluster`
pub fn create_db_cluster(ctx: &SimulationContext<'_>) -> HandlerOutput {
    let identifier = ctx.text_or("dbClusterIdentifier", DEFAULT_CLUSTER_IDENTIFIER);

    HandlerOutput::new("RDS cluster created successfully")
        .with_field(
            "dbClusterIdentifier",
            ctx.value_or("dbClusterIdentifier", DEFAULT_CLUSTER_IDENTIFIER),
        )
        .with_field("endpoint", cluster_endpoint(&identifier))
        .with_field("readerEndpoint", reader_endpoint(&identifier))
        .with_field("status", "available")
}
