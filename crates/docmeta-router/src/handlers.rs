//! HTTP request handlers for the Router service.
//!
//! Serves the upload page, the rendered metadata page, a JSON and CSV API
//! over the same pipeline, and a health check.

use crate::pages;
use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use docmeta_domain::{ExportError, MetadataRecord, UploadedFile, CSV_CONTENT_TYPE, CSV_FILE_NAME};
use docmeta_extractor::{process, Extraction, ExtractorError, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Multipart field carrying the document
pub const UPLOAD_FIELD: &str = "file";

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Server version
    pub version: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or oversized multipart body
    #[error("Invalid upload: {0}")]
    Multipart(#[from] MultipartError),

    /// No `file` field in the form
    #[error("No file uploaded.")]
    MissingFile,

    /// Document could not be decoded or parsed
    #[error("{0}")]
    Extraction(#[from] ExtractorError),

    /// Extension is not supported
    #[error("{msg}", msg = Extraction::UNSUPPORTED_MESSAGE)]
    Unsupported,

    /// Supported document with no text
    #[error("{msg}", msg = Outcome::EMPTY_MESSAGE)]
    NoText,

    /// CSV serialization failed
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Multipart(e) => e.status(),
            AppError::MissingFile => StatusCode::BAD_REQUEST,
            AppError::Extraction(_) | AppError::NoText => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unsupported => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Export(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render as an HTML page instead of JSON
    fn into_html(self) -> Response {
        (self.status(), Html(pages::error_page(&self.to_string()))).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}

/// Read the uploaded document out of the form
async fn read_upload(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        let content = field.bytes().await?;
        info!(file_name = %name, bytes = content.len(), "Received upload");
        return Ok(UploadedFile::new(name, content.to_vec()));
    }
    Err(AppError::MissingFile)
}

/// Read the upload and run the pipeline on the blocking pool
async fn run_upload(multipart: Multipart) -> Result<(String, Outcome), AppError> {
    let file = read_upload(multipart).await?;
    let file_name = file.name.clone();

    let outcome = tokio::task::spawn_blocking(move || process(&file))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .inspect_err(|e| warn!(file_name = %file_name, error = %e, "Upload rejected"))?;

    Ok((file_name, outcome))
}

/// Record from an outcome, or the API error for outcomes without one
fn into_record(outcome: Outcome) -> Result<MetadataRecord, AppError> {
    match outcome {
        Outcome::Metadata(record) => Ok(record),
        Outcome::Empty => Err(AppError::NoText),
        Outcome::Unsupported { .. } => Err(AppError::Unsupported),
    }
}

/// GET / - Upload form
async fn index() -> Html<String> {
    Html(pages::index_page())
}

/// POST /upload - Render metadata for the uploaded document
async fn upload(multipart: Multipart) -> Response {
    let (file_name, outcome) = match run_upload(multipart).await {
        Ok(result) => result,
        Err(e) => return e.into_html(),
    };

    match outcome {
        Outcome::Metadata(record) => match record.to_csv() {
            Ok(csv) => Html(pages::metadata_page(&file_name, &record, &csv)).into_response(),
            Err(e) => AppError::from(e).into_html(),
        },
        // Empty text is a soft failure; the page stays usable for a retry
        Outcome::Empty => Html(pages::message_page(&file_name, Outcome::EMPTY_MESSAGE)).into_response(),
        Outcome::Unsupported { .. } => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Html(pages::message_page(&file_name, Extraction::UNSUPPORTED_MESSAGE)),
        )
            .into_response(),
    }
}

/// POST /api/metadata - Metadata record as JSON
async fn api_metadata(multipart: Multipart) -> Result<Json<MetadataRecord>, AppError> {
    let (_, outcome) = run_upload(multipart).await?;
    Ok(Json(into_record(outcome)?))
}

/// POST /api/metadata.csv - Metadata record as a CSV attachment
async fn api_metadata_csv(multipart: Multipart) -> Result<Response, AppError> {
    let (_, outcome) = run_upload(multipart).await?;
    let csv = into_record(outcome)?.to_csv()?;
    let disposition = format!("attachment; filename=\"{}\"", CSV_FILE_NAME);

    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router(max_upload_bytes: usize) -> AxumRouter {
    AxumRouter::new()
        .route("/", get(index))
        .route("/upload", post(upload))
        .route("/api/metadata", post(api_metadata))
        .route("/api/metadata.csv", post(api_metadata_csv))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
