#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use pdf_sidecar::diagnostics::{CapabilityProbe, HealthReporter, ProbeOutcome};
use pdf_sidecar::routes::create_router;
use pdf_sidecar::state::AppState;
use tempfile::TempDir;

/// Probe that always reports the same outcome
pub struct FixedProbe(pub ProbeOutcome);

#[async_trait]
impl CapabilityProbe for FixedProbe {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn probe(&self) -> ProbeOutcome {
        self.0.clone()
    }
}

pub fn available(version: &str) -> ProbeOutcome {
    ProbeOutcome::Available {
        version: Some(version.to_string()),
    }
}

pub fn unavailable(reason: &str) -> ProbeOutcome {
    ProbeOutcome::Unavailable {
        reason: reason.to_string(),
    }
}

/// Router wired to a fixed probe outcome
pub fn create_test_app(outcome: ProbeOutcome) -> Router {
    let reporter = HealthReporter::new(Arc::new(FixedProbe(outcome)));
    create_router(AppState::from_reporter(reporter))
}

/// Write `contents` to `name` inside `dir` and return the full path
pub fn write_fixture(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture");
    path
}
