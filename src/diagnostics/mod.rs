//! Runtime diagnostics reported by `GET /health`.
//!
//! `HealthReporter` builds a fresh `HealthPayload` for every call: the sidecar
//! version, the running executable and the result of the capability probe.
//! Building a payload cannot fail; probe failures are carried in the payload.

pub mod probe;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::{HEALTH_STATUS_OK, INTERPRETER_VERSION, SERVICE_NAME};

pub use probe::{CapabilityProbe, MuPdfToolProbe, ProbeOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthPayload {
    pub status: String,
    pub service: String,
    pub interpreter_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter_executable: Option<String>,
    pub pdf_capability_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_capability_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_capability_error: Option<String>,
}

impl HealthPayload {
    /// Assemble a payload for the current process from a probe outcome.
    pub fn from_outcome(outcome: ProbeOutcome) -> Self {
        let (available, version, error) = match outcome {
            ProbeOutcome::Available { version } => (true, version, None),
            ProbeOutcome::Unavailable { reason } => (false, None, Some(reason)),
        };

        Self {
            status: HEALTH_STATUS_OK.to_string(),
            service: SERVICE_NAME.to_string(),
            interpreter_version: INTERPRETER_VERSION.to_string(),
            interpreter_executable: std::env::current_exe()
                .ok()
                .map(|path| path.display().to_string()),
            pdf_capability_available: available,
            pdf_capability_version: version,
            pdf_capability_error: error,
        }
    }
}

/// Builds health payloads using an injected capability probe.
#[derive(Clone)]
pub struct HealthReporter {
    probe: Arc<dyn CapabilityProbe>,
}

impl HealthReporter {
    pub fn new(probe: Arc<dyn CapabilityProbe>) -> Self {
        Self { probe }
    }

    pub async fn report(&self) -> HealthPayload {
        let outcome = self.probe.probe().await;
        if let ProbeOutcome::Unavailable { reason } = &outcome {
            tracing::debug!(capability = %self.probe.name(), %reason, "PDF capability unavailable");
        }
        HealthPayload::from_outcome(outcome)
    }
}

impl Default for HealthReporter {
    fn default() -> Self {
        Self::new(Arc::new(MuPdfToolProbe::default()))
    }
}
