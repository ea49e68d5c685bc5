//! API error types with structured JSON responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use icdxn_db::error::DatabaseError;
use icdxn_tabular::TabularError;
use serde::Serialize;

/// Error response body: `{"error": CODE, "message": text}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidInput(String),
    /// Selector or update matched nothing. Reported as 400, which the curation
    /// UI treats as a user-facing notice.
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("No tests found")]
    NoTests,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            Self::InvalidInput(detail) => (StatusCode::BAD_REQUEST, "INVALID_INPUT", detail),
            Self::NotFound(detail) => (StatusCode::BAD_REQUEST, "NOT_FOUND", detail),
            Self::NoTests => (
                StatusCode::NOT_FOUND,
                "NO_TESTS",
                "No tests found".to_string(),
            ),
            Self::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { error, message })).into_response()
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::InvalidInput(detail) => Self::InvalidInput(detail),
            DatabaseError::NotFound(detail) => Self::NotFound(detail),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<TabularError> for ApiError {
    fn from(err: TabularError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(err.to_string())
    }
}
