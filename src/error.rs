//! Application error handling
//!
//! A single error taxonomy for the whole API. Every expected failure is
//! a distinct variant here; `IntoResponse` is the one place internal
//! error kinds are translated to external status codes and body codes.
//!
//! Unknown-identity and bad-credential login failures stay distinct
//! variants (for logs and tests) but are deliberately indistinguishable
//! in the response body, so login failures do not reveal whether an
//! email is registered.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("No account for the supplied email")]
    UnknownIdentity,

    #[error("Password verification failed")]
    BadCredential,

    #[error("Missing authorization header")]
    MissingToken,

    #[error("Malformed authorization header")]
    MalformedToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Expired token")]
    ExpiredToken,

    #[error("Token subject no longer exists")]
    UnknownSubject,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            ApiError::DuplicateEmail => (
                StatusCode::CONFLICT,
                "EMAIL_TAKEN",
                "Email is already registered".to_string(),
            ),
            // Same external shape for both credential failures; the
            // distinct kind still lands in the server log.
            ApiError::UnknownIdentity => {
                warn!("Login failed: unknown identity");
                (
                    StatusCode::UNAUTHORIZED,
                    "INVALID_CREDENTIALS",
                    "Invalid email or password".to_string(),
                )
            }
            ApiError::BadCredential => {
                warn!("Login failed: bad credential");
                (
                    StatusCode::UNAUTHORIZED,
                    "INVALID_CREDENTIALS",
                    "Invalid email or password".to_string(),
                )
            }
            ApiError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "MISSING_TOKEN",
                "Missing authorization header".to_string(),
            ),
            ApiError::MalformedToken => (
                StatusCode::UNAUTHORIZED,
                "MALFORMED_TOKEN",
                "Authorization header must be 'Bearer <token>'".to_string(),
            ),
            ApiError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "Token is invalid".to_string(),
            ),
            ApiError::ExpiredToken => (
                StatusCode::UNAUTHORIZED,
                "TOKEN_EXPIRED",
                "Token has expired".to_string(),
            ),
            ApiError::UnknownSubject => (
                StatusCode::UNAUTHORIZED,
                "UNKNOWN_SUBJECT",
                "Token subject no longer exists".to_string(),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
