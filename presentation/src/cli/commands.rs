//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for use-mcp-tool
#[derive(Parser, Debug)]
#[command(name = "use-mcp-tool")]
#[command(author, version, about = "Simulate MCP tool calls with deterministic fixtures")]
#[command(long_about = r#"
use-mcp-tool answers a tool call on a named MCP server with a deterministic,
simulated result. Nothing is provisioned; identifiers are fixed fixtures so
playbooks and pipelines can be exercised end-to-end.

Requests for the eligible server and region (default: ansible / us-east-1)
receive tool-specific fixtures (aws_vpc, aws_ec2, aws_efs, aws_rds, aws_elb).
Everything else receives a generic success result.

Module parameters come from flags, from a JSON args file, or both
(flags win). The response is printed to stdout as JSON.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./mcpsim.toml       Project-level config
3. ~/.config/use-mcp-tool/config.toml   Global config

Example:
  use-mcp-tool --server-name ansible --tool-name aws_vpc \
    --arguments '{"action":"create","region":"us-east-1","cidrBlock":"10.0.0.0/16"}'
  use-mcp-tool --args-file /tmp/args.json --check
"#)]
pub struct Cli {
    /// Name of the MCP server providing the tool
    #[arg(long, value_name = "NAME")]
    pub server_name: Option<String>,

    /// Name of the tool to execute
    #[arg(long, value_name = "NAME")]
    pub tool_name: Option<String>,

    /// Tool input parameters as a JSON object
    #[arg(long, value_name = "JSON")]
    pub arguments: Option<String>,

    /// JSON file holding the full module parameters
    #[arg(long, value_name = "PATH")]
    pub args_file: Option<PathBuf>,

    /// Check mode: validate the request but report no change
    #[arg(long)]
    pub check: bool,

    /// Server name that receives tool-specific fixtures
    #[arg(long, value_name = "NAME")]
    pub eligible_server: Option<String>,

    /// Region that receives tool-specific fixtures
    #[arg(long, value_name = "REGION")]
    pub eligible_region: Option<String>,

    /// List the registered tool/action handlers and exit
    #[arg(long)]
    pub list_handlers: bool,

    /// Print the response as single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Append one JSONL audit record per invocation to this file
    #[arg(long, value_name = "PATH")]
    pub audit_log: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_module_flags() {
        let cli = Cli::parse_from([
            "use-mcp-tool",
            "--server-name",
            "ansible",
            "--tool-name",
            "aws_vpc",
            "--arguments",
            r#"{"action":"create"}"#,
            "--check",
            "-vv",
        ]);

        assert_eq!(cli.server_name.as_deref(), Some("ansible"));
        assert_eq!(cli.tool_name.as_deref(), Some("aws_vpc"));
        assert_eq!(cli.arguments.as_deref(), Some(r#"{"action":"create"}"#));
        assert!(cli.check);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.compact);
    }
}
