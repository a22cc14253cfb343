//! Error types for the factory API.
//!
//! Malformed bodies and wrong content types are rejected by axum's extractors
//! before application code runs; this enum covers what the handlers add.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified error type for API operations.
#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Error response body for API clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for FactoryError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            FactoryError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "The requested URL was not found on the server".to_string(),
                Some(path.clone()),
            ),
            FactoryError::Validation(msg) => {
                tracing::debug!(error = %msg, "Rejected payload");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    "Input payload validation failed".to_string(),
                    Some(msg.clone()),
                )
            }
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations.
pub type FactoryResult<T> = Result<T, FactoryError>;
