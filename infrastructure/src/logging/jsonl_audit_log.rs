//! JSONL audit trail.
//!
//! One line per module run. A playbook spawns a fresh process for every
//! task, so the file is opened in append mode and each line goes out in a
//! single `write_all` on an unbuffered handle; concurrent runs never
//! interleave partial lines.

use mcpsim_application::ports::audit_log::{AuditLog, InvocationRecord};
use mcpsim_domain::tool::value_objects::{OriginalMessage, ResultPayload};
use serde::Serialize;
use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// On-disk shape of an [`InvocationRecord`]
#[derive(Serialize)]
struct AuditLine<'a> {
    timestamp: String,
    pid: u32,
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    request: Option<&'a OriginalMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<&'a Value>,
    changed: bool,
    message: &'a str,
    result: &'a ResultPayload,
}

impl<'a> AuditLine<'a> {
    fn new(record: &'a InvocationRecord) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            pid: std::process::id(),
            outcome: record.outcome.as_str(),
            request: record.request.as_ref(),
            params: record.params.as_ref(),
            changed: record.changed,
            message: &record.message,
            result: &record.result,
        }
    }

    fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        let mut bytes = serde_json::to_vec(self)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

/// Append-only JSONL [`AuditLog`]
pub struct JsonlAuditLog {
    file: Mutex<File>,
    path: PathBuf,
}

impl JsonlAuditLog {
    /// Open `path` for appending, creating it and its parent directories.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, record: &InvocationRecord) -> io::Result<()> {
        let bytes = AuditLine::new(record).to_bytes()?;
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("audit log lock poisoned"))?;
        file.write_all(&bytes)
    }
}

impl AuditLog for JsonlAuditLog {
    fn record(&self, record: &InvocationRecord) {
        if let Err(e) = self.append(record) {
            warn!("Could not append to audit log {}: {}", self.path.display(), e);
        }
    }
}
