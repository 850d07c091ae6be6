//! HTTP routes for the sidecar.
//!
//! Exactly two routes exist: `GET /health` and `POST /inspect-pdf`. Every other
//! path, and every other method on those two paths, answers 404 with an empty
//! body. Requests are served one at a time.

pub mod health;
pub mod inspect;

use axum::{
    routing::{get, post},
    Router,
};
use tower::limit::GlobalConcurrencyLimitLayer;

use crate::config::MAX_IN_FLIGHT_REQUESTS;
use crate::error::AppError;
use crate::state::AppState;

/// Fallback for unmatched paths and methods.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Creates the Axum router with both routes and the 404 fallbacks.
pub fn create_router(state: AppState) -> Router {
    // HEAD would otherwise be answered by the GET handler
    let health_routes = Router::new().route(
        "/health",
        get(health::health).head(not_found).fallback(not_found),
    );

    let inspect_routes = Router::new().route(
        "/inspect-pdf",
        post(inspect::inspect_pdf).fallback(not_found),
    );

    Router::new()
        .merge(health_routes)
        .merge(inspect_routes)
        .fallback(not_found)
        .with_state(state)
        .layer(GlobalConcurrencyLimitLayer::new(MAX_IN_FLIGHT_REQUESTS))
}
