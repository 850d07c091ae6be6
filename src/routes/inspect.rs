//! PDF inspection endpoint.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use serde_json::Value;

use crate::error::{AppError, FILE_PATH_REQUIRED};
use crate::inspect::InspectionResult;
use crate::state::AppState;

/// Inspect the file named by the `filePath` field of the JSON body.
///
/// The body is taken as raw bytes so the outcome does not depend on the
/// request's `Content-Type`. A body that cannot be buffered (too large,
/// aborted) is reported like any other failure.
pub async fn inspect_pdf(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<InspectionResult>, AppError> {
    let body = body?;
    let path = file_path_from_body(&body)?;
    let result = state.inspector.inspect(&path).await?;
    Ok(Json(result))
}

/// Decode the request body and pull out a non-empty `filePath` string.
///
/// An empty body counts as an empty object.
pub fn file_path_from_body(body: &[u8]) -> Result<String, AppError> {
    let text = std::str::from_utf8(body)?;
    if text.is_empty() {
        return Err(AppError::validation(FILE_PATH_REQUIRED));
    }

    let payload: Value = serde_json::from_str(text)?;
    match payload.get("filePath") {
        Some(Value::String(path)) if !path.is_empty() => Ok(path.clone()),
        _ => Err(AppError::validation(FILE_PATH_REQUIRED)),
    }
}
