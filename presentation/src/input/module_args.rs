//! Module parameter intake
//!
//! Collects the three module parameters from a JSON args file and/or
//! command-line flags into the raw parameter object the application layer
//! normalizes. Only transport problems (unreadable file, malformed JSON
//! text) are reported here; field validation belongs to the normalizer.

use mcpsim_application::use_cases::normalize_request::{ARGUMENTS, SERVER_NAME, TOOL_NAME};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Host flag carried inside the parameter object
pub const CHECK_MODE_KEY: &str = "_ansible_check_mode";

/// Errors reading module parameters
#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("Failed to read args file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Args file {} is not valid JSON: {source}", .path.display())]
    InvalidFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Args file {} must contain a JSON object", .0.display())]
    NotAnObject(PathBuf),

    #[error("--arguments is not valid JSON: {0}")]
    InvalidArguments(#[source] serde_json::Error),
}

/// Raw module parameters plus the host's check-mode flag
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleArgs {
    pub params: Value,
    pub check_mode: bool,
}

impl ModuleArgs {
    /// Build the parameters from an optional args file overlaid with flags.
    ///
    /// Check mode is on when `check` is set or the file carries
    /// `_ansible_check_mode: true`.
    pub fn collect(
        args_file: Option<&Path>,
        server_name: Option<&str>,
        tool_name: Option<&str>,
        arguments: Option<&str>,
        check: bool,
    ) -> Result<Self, ArgsError> {
        let mut params = match args_file {
            Some(path) => read_args_file(path)?,
            None => Map::new(),
        };

        if let Some(name) = server_name {
            params.insert(SERVER_NAME.to_string(), Value::String(name.to_string()));
        }
        if let Some(name) = tool_name {
            params.insert(TOOL_NAME.to_string(), Value::String(name.to_string()));
        }
        if let Some(text) = arguments {
            let value: Value = serde_json::from_str(text).map_err(ArgsError::InvalidArguments)?;
            params.insert(ARGUMENTS.to_string(), value);
        }

        let check_mode = check
            || params
                .get(CHECK_MODE_KEY)
                .and_then(Value::as_bool)
                .unwrap_or(false);

        Ok(Self {
            params: Value::Object(params),
            check_mode,
        })
    }
}

fn read_args_file(path: &Path) -> Result<Map<String, Value>, ArgsError> {
    let content = std::fs::read_to_string(path).map_err(|source| ArgsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match serde_json::from_str(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ArgsError::NotAnObject(path.to_path_buf())),
        Err(source) => Err(ArgsError::InvalidFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn args_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_collect_from_flags() {
        let args = ModuleArgs::collect(
            None,
            Some("ansible"),
            Some("aws_vpc"),
            Some(r#"{"action": "create"}"#),
            false,
        )
        .unwrap();

        assert_eq!(
            args.params,
            json!({"server_name": "ansible", "tool_name": "aws_vpc", "arguments": {"action": "create"}})
        );
        assert!(!args.check_mode);
    }

    #[test]
    fn test_flags_override_file() {
        let file = args_file(
            r#"{"server_name": "ansible", "tool_name": "aws_vpc", "arguments": {"action": "create"}}"#,
        );

        let args =
            ModuleArgs::collect(Some(file.path()), None, Some("aws_elb"), None, false).unwrap();

        assert_eq!(args.params["server_name"], "ansible");
        assert_eq!(args.params["tool_name"], "aws_elb");
        assert_eq!(args.params["arguments"]["action"], "create");
    }

    #[test]
    fn test_check_mode_from_file() {
        let file = args_file(r#"{"server_name": "ansible", "_ansible_check_mode": true}"#);
        let args = ModuleArgs::collect(Some(file.path()), None, None, None, false).unwrap();
        assert!(args.check_mode);
    }

    #[test]
    fn test_check_flag() {
        let args = ModuleArgs::collect(None, None, None, None, true).unwrap();
        assert!(args.check_mode);
        assert_eq!(args.params, json!({}));
    }

    #[test]
    fn test_non_object_arguments_are_passed_through() {
        let args = ModuleArgs::collect(None, None, None, Some("[1, 2]"), false).unwrap();
        assert_eq!(args.params["arguments"], json!([1, 2]));
    }

    #[test]
    fn test_invalid_arguments_json() {
        let err = ModuleArgs::collect(None, None, None, Some("{action: create"), false).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidArguments(_)));
    }

    #[test]
    fn test_args_file_errors() {
        let file = args_file("[\"not\", \"an\", \"object\"]");
        let err = ModuleArgs::collect(Some(file.path()), None, None, None, false).unwrap_err();
        assert!(matches!(err, ArgsError::NotAnObject(_)));

        let file = args_file("{broken");
        let err = ModuleArgs::collect(Some(file.path()), None, None, None, false).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidFile { .. }));

        let err = ModuleArgs::collect(
            Some(Path::new("/nonexistent/args.json")),
            None,
            None,
            None,
            false,
        )
        .unwrap_err();
        assert!(matches!(err, ArgsError::Read { .. }));
    }
}
