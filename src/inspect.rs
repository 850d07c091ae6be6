//! PDF header inspection for `POST /inspect-pdf`.
//!
//! The inspector opens the requested file, reads at most the first
//! `HEADER_LEN` bytes and compares them with the PDF magic. Whether the file
//! exists is not checked up front; a failed open is reported as the error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::config::{HEADER_LEN, INSPECTION_MESSAGE, PDF_MAGIC};
use crate::diagnostics::{HealthPayload, HealthReporter};
use crate::error::{AppError, FILE_PATH_REQUIRED};

/// Attributes of a single inspected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInspection {
    pub accepted: bool,
    pub file_name: String,
    pub file_size_bytes: u64,
    pub header_hex: String,
    pub message: String,
}

/// Response body of a successful inspection: the health payload plus the
/// file attributes, serialized as one flat object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionResult {
    #[serde(flatten)]
    pub health: HealthPayload,
    #[serde(flatten)]
    pub inspection: FileInspection,
}

/// True when `header` is exactly the PDF magic.
pub fn is_pdf_header(header: &[u8]) -> bool {
    header == &PDF_MAGIC[..]
}

/// Final path component, or an empty string when the path has none.
pub fn file_name_of(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Open `path`, read its leading bytes and stat it.
///
/// The file handle lives only inside this function, so it is closed on every
/// return path, including read and metadata errors.
pub async fn read_header(path: &str) -> Result<FileInspection, AppError> {
    let file = File::open(path)
        .await
        .map_err(|e| AppError::io(path, e))?;

    let file_size_bytes = file
        .metadata()
        .await
        .map_err(|e| AppError::io(path, e))?
        .len();

    let mut header = Vec::with_capacity(HEADER_LEN as usize);
    file.take(HEADER_LEN)
        .read_to_end(&mut header)
        .await
        .map_err(|e| AppError::io(path, e))?;

    Ok(FileInspection {
        accepted: is_pdf_header(&header),
        file_name: file_name_of(path),
        file_size_bytes,
        header_hex: hex::encode(&header),
        message: INSPECTION_MESSAGE.to_string(),
    })
}

/// Combines header inspection with the current health payload.
#[derive(Clone)]
pub struct FileInspector {
    health: HealthReporter,
}

impl FileInspector {
    pub fn new(health: HealthReporter) -> Self {
        Self { health }
    }

    pub async fn inspect(&self, path: &str) -> Result<InspectionResult, AppError> {
        if path.is_empty() {
            return Err(AppError::validation(FILE_PATH_REQUIRED));
        }

        let inspection = read_header(path).await?;
        let health = self.health.report().await;

        Ok(InspectionResult { health, inspection })
    }
}
