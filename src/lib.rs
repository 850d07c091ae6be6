//! pdf-sidecar: a local diagnostic helper for a desktop application.
//!
//! Serves two routes on a loopback listener: `GET /health` reports the runtime
//! and whether the optional PDF-rendering tool is present, and
//! `POST /inspect-pdf` checks whether a file starts with the PDF magic.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod http;
pub mod inspect;
pub mod routes;
pub mod state;

pub use error::{AppError, ErrorResponse};
