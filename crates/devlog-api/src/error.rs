//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`; `AppError`
//! values convert into `HttpAppError` via `?` so every failure renders
//! with a consistent status, body, and log line.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use devlog_core::{AppError, ErrorMetadata, LogLevel};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Machine-readable error code for programmatic handling
    pub code: String,
    /// Whether this error is recoverable (can be retried)
    pub recoverable: bool,
    /// Suggested action for the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<String>,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from devlog-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        })
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let err = &self.0;

        match err.log_level() {
            LogLevel::Debug => {
                tracing::debug!(error = %err, code = err.error_code(), "Request failed")
            }
            LogLevel::Warn => {
                tracing::warn!(error = %err, code = err.error_code(), "Request failed")
            }
            LogLevel::Error => {
                tracing::error!(error = %err.detailed_message(), code = err.error_code(), "Request failed")
            }
        }

        let status = StatusCode::from_u16(err.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let details = if err.is_sensitive() {
            None
        } else {
            Some(err.to_string())
        };

        let body = ErrorResponse {
            error: err.client_message(),
            details,
            code: err.error_code().to_string(),
            recoverable: err.is_recoverable(),
            suggested_action: err.suggested_action().map(str::to_string),
        };

        (status, Json(body)).into_response()
    }
}
