pub mod handlers;

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by every failing endpoint.
///
/// ```json
/// { "message": "no event matches ID 'e1'" }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Application error type that can be converted to HTTP responses.
///
/// Request-body decode failures and store failures are both reported as
/// `500 Internal Server Error`; the underlying error text is passed through
/// unchanged in `message`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    BodyRead(#[from] BytesRejection),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Decode(_) | AppError::BodyRead(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Decode(e) => tracing::warn!(error = %e, "Request body decode failed"),
            AppError::BodyRead(e) => tracing::warn!(error = %e, "Request body read failed"),
            AppError::NotFound(msg) => tracing::debug!("Not found: {}", msg),
            AppError::InternalServerError(msg) => tracing::error!("Internal error: {}", msg),
        }

        let body = ErrorResponse {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
