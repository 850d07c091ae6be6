//! Health endpoint queried by the parent application.
//!
//! Always answers 200 while the process can respond; capability problems are
//! reported inside the payload, never as an HTTP error.

use axum::{extract::State, Json};

use crate::diagnostics::HealthPayload;
use crate::state::AppState;

/// Health check handler.
pub async fn health(State(state): State<AppState>) -> Json<HealthPayload> {
    Json(state.health.report().await)
}
