//! EFS fixtures: aws_efs.create_file_system

use mcpsim_domain::{HandlerOutput, SimulationContext};

/// Tool name
pub const AWS_EFS: &str = "aws_efs";

/// Action names
pub const CREATE_FILE_SYSTEM: &str = "create_file_system";

pub const FILE_SYSTEM_ID: &str = "fs-12345678";

/// Simulate `aws_efs.create_file_system` (takes no arguments)
pub fn create_file_system(_ctx: &SimulationContext<'_>) -> HandlerOutput {
    HandlerOutput::new("EFS file system created successfully")
        .with_field("fileSystemId", FILE_SYSTEM_ID)
        .with_field("lifeCycleState", "available")
}
