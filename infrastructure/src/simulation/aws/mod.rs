//! AWS provisioning fixtures
//!
//! One file per service. Each exposes its tool/action name constants and a
//! pure handler function; [`aws_handler_registry`] registers them all.
//!
//! | HandlerKey | Handler |
//! |------------|---------|
//! | `aws_vpc.create` | [`vpc::create_vpc`] |
//! | `aws_ec2.create_security_group` | [`ec2::create_security_group`] |
//! | `aws_efs.create_file_system` | [`efs::create_file_system`] |
//! | `aws_rds.create_db_cluster` | [`rds::create_db_cluster`] |
//! | `aws_ec2.create` | [`ec2::create_instance`] |
//! | `aws_elb.create` | [`elb::create_load_balancer`] |

pub mod ec2;
pub mod efs;
pub mod elb;
pub mod rds;
pub mod vpc;

use mcpsim_domain::{DomainError, HandlerKey, HandlerRegistry};

/// Build the registry of all AWS fixture handlers
pub fn aws_handler_registry() -> Result<HandlerRegistry, DomainError> {
    register_aws_handlers(HandlerRegistry::new())
}

/// Add the AWS fixture handlers to an existing registry
///
/// Fails if the registry already holds one of the AWS keys.
pub fn register_aws_handlers(registry: HandlerRegistry) -> Result<HandlerRegistry, DomainError> {
    registry
        .register(HandlerKey::new(vpc::AWS_VPC, vpc::CREATE), vpc::create_vpc)?
        .register(
            HandlerKey::new(ec2::AWS_EC2, ec2::CREATE_SECURITY_GROUP),
            ec2::create_security_group,
        )?
        .register(
            HandlerKey::new(efs::AWS_EFS, efs::CREATE_FILE_SYSTEM),
            efs::create_file_system,
        )?
        .register(
            HandlerKey::new(rds::AWS_RDS, rds::CREATE_DB_CLUSTER),
            rds::create_db_cluster,
        )?
        .register(HandlerKey::new(ec2::AWS_EC2, ec2::CREATE), ec2::create_instance)?
        .register(HandlerKey::new(elb::AWS_ELB, elb::CREATE), elb::create_load_balancer)
}
