//! CLI entrypoint for use-mcp-tool
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use mcpsim_application::{AuditLog, InvokeToolInput, InvokeToolUseCase, SimulationEnginePort};
use mcpsim_infrastructure::{
    ConfigLoader, FileConfig, JsonlAuditLog, Severity, SimulationEngine,
};
use mcpsim_presentation::{Cli, ConsoleFormatter, ModuleArgs};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; stdout is reserved for JSON
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    let compact = cli.compact || config.output.compact;

    // === Dependency Injection ===
    let mut rule = config.simulation.to_rule();
    if let Some(server) = &cli.eligible_server {
        rule.server_name = server.clone();
    }
    if let Some(region) = &cli.eligible_region {
        rule.region = region.clone();
    }
    debug!(server = %rule.server_name, region = %rule.region, "Eligibility rule");

    let engine = Arc::new(SimulationEngine::with_aws_fixtures(rule)?);

    if cli.list_handlers {
        println!(
            "{}",
            ConsoleFormatter::format_handler_keys(&engine.handler_keys(), compact)
        );
        return Ok(ExitCode::SUCCESS);
    }

    let args = match ModuleArgs::collect(
        cli.args_file.as_deref(),
        cli.server_name.as_deref(),
        cli.tool_name.as_deref(),
        cli.arguments.as_deref(),
        cli.check,
    ) {
        Ok(args) => args,
        Err(e) => {
            println!("{}", ConsoleFormatter::format_failure(&e.to_string(), compact));
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut use_case = InvokeToolUseCase::new(engine);
    let audit_path = cli
        .audit_log
        .clone()
        .or_else(|| config.logging.audit_log.as_ref().map(PathBuf::from));
    if let Some(path) = audit_path {
        match JsonlAuditLog::open(&path) {
            Ok(audit_log) => {
                info!("Audit log: {}", audit_log.path().display());
                let audit_log: Arc<dyn AuditLog> = Arc::new(audit_log);
                use_case = use_case.with_audit_log(audit_log);
            }
            Err(e) => warn!("Audit log disabled, cannot open {}: {}", path.display(), e),
        }
    }

    let input = InvokeToolInput::new(args.params).with_check_mode(args.check_mode);
    match use_case.execute(input) {
        Ok(response) => {
            println!("{}", ConsoleFormatter::format_response(&response, compact));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{}", ConsoleFormatter::format_failure(&e.to_string(), compact));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Load and validate configuration according to the CLI flags
fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }

    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }

    let config = ConfigLoader::load(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    let mut fatal = false;
    for issue in config.validate() {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => {
                tracing::error!("{}", issue.message);
                fatal = true;
            }
        }
    }
    if fatal {
        bail!("Invalid configuration");
    }

    Ok(config)
}
