//! Shared application state for request handlers.

use crate::diagnostics::HealthReporter;
use crate::inspect::FileInspector;

/// Handler dependencies, injected when the router is built.
///
/// Holds no per-request data; both members are stateless and cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub health: HealthReporter,
    pub inspector: FileInspector,
}

impl AppState {
    pub fn new(health: HealthReporter, inspector: FileInspector) -> Self {
        Self { health, inspector }
    }

    /// State wired to a single reporter, shared by the health route and the inspector.
    pub fn from_reporter(health: HealthReporter) -> Self {
        let inspector = FileInspector::new(health.clone());
        Self::new(health, inspector)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_reporter(HealthReporter::default())
    }
}
