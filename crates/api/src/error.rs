use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog_entry_core::error::CoreError;
use catalog_entry_core::export::ExportError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`ExportError`] for domain errors and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce the
/// `{ "success": false, "message": ..., "code": ... }` body the entry page
/// expects.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `catalog_entry_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A spreadsheet export failure.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }

            // --- Export errors ---
            AppError::Export(err) => classify_export_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "success": false,
            "message": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify an export error into an HTTP status, error code, and message.
///
/// - An empty catalog is the caller's mistake and maps to 400.
/// - Write failures map to 500. The message is kept because it describes the
///   path the user typed in, not server internals.
fn classify_export_error(err: &ExportError) -> (StatusCode, &'static str, String) {
    match err {
        ExportError::EmptyCatalog => (StatusCode::BAD_REQUEST, "EMPTY_CATALOG", err.to_string()),
        other => {
            tracing::error!(error = %other, "Catalog export failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "EXPORT_FAILED",
                other.to_string(),
            )
        }
    }
}
