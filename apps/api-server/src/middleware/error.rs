//! Error handling - maps service failures to RFC 7807 responses.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use quill_core::error::StoreError;
use quill_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
///
/// All variants are per-request and recoverable; nothing here aborts the
/// process.
#[derive(Debug)]
pub enum AppError {
    /// Path id was not a valid integer.
    InvalidId(String),
    /// A required field was missing or empty.
    Validation(String),
    /// Payload could not be decoded.
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidId(raw) => write!(f, "Invalid post id: {}", raw),
            AppError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidId(_) | AppError::Validation(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::InvalidId(raw) => {
                ErrorResponse::bad_request(format!("invalid post id: {}", raw))
            }
            AppError::Validation(detail) => ErrorResponse::bad_request(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound("post not found".to_string()),
        }
    }
}

/// Rewrites Actix's default JSON extractor failures (malformed bodies) into
/// the same RFC 7807 shape as every other 400.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
