//! Optional PDF-rendering capability detection.
//!
//! A probe tries to use the optional capability and reports what happened as a
//! `ProbeOutcome`. Probes never fail: a missing tool, a crash or a timeout all
//! become `ProbeOutcome::Unavailable` with the reason as text.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::{PDF_TOOL_COMMAND, PROBE_TIMEOUT};

/// Result of a single capability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Available { version: Option<String> },
    Unavailable { reason: String },
}

#[async_trait]
pub trait CapabilityProbe: Send + Sync {
    /// Short name of the capability, used in log fields.
    fn name(&self) -> &str;

    async fn probe(&self) -> ProbeOutcome;
}

/// Detects the MuPDF command-line tool by running `<command> -v`.
#[derive(Debug, Clone)]
pub struct MuPdfToolProbe {
    command: String,
    timeout: Duration,
}

impl MuPdfToolProbe {
    pub fn new(command: impl Into<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            timeout,
        }
    }
}

impl Default for MuPdfToolProbe {
    fn default() -> Self {
        Self::new(PDF_TOOL_COMMAND, PROBE_TIMEOUT)
    }
}

#[async_trait]
impl CapabilityProbe for MuPdfToolProbe {
    fn name(&self) -> &str {
        &self.command
    }

    async fn probe(&self) -> ProbeOutcome {
        let mut command = Command::new(&self.command);
        command.arg("-v").stdin(Stdio::null()).kill_on_drop(true);

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                return ProbeOutcome::Unavailable {
                    reason: e.to_string(),
                }
            }
            Err(_) => {
                return ProbeOutcome::Unavailable {
                    reason: format!("{} -v timed out after {:?}", self.command, self.timeout),
                }
            }
        };

        // mutool prints its banner on stderr; other builds use stdout
        let text = format!(
            "{}{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );

        match (parse_version(&text), output.status.success()) {
            (Some(version), _) => ProbeOutcome::Available {
                version: Some(version),
            },
            (None, true) => ProbeOutcome::Available { version: None },
            (None, false) => ProbeOutcome::Unavailable {
                reason: format!("{} -v exited with {}", self.command, output.status),
            },
        }
    }
}

/// Extract the token following the word `version` in tool output.
pub fn parse_version(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let mut tokens = line.split_whitespace();
        tokens.by_ref().find(|t| t.eq_ignore_ascii_case("version"))?;
        tokens.next().map(str::to_string)
    })
}
