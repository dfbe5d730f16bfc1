//! Error types for the user service
//!
//! Every error maps to a status code with an empty body; the detail is only logged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

// == User Error Enum ==
/// Unified error type for the user service.
#[derive(Error, Debug)]
pub enum UserError {
    /// Request body is not valid JSON or does not match the payload shape
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Payload parsed but failed field-level rules
    #[error("Validation failed: {0}")]
    ValidationFailure(String),

    /// Create targeted an id that is already stored
    #[error("User already exists: {0}")]
    Conflict(i32),

    /// Update targeted an id that is not stored
    #[error("User not found: {0}")]
    NotFound(i32),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserError {
    /// Status code sent to the client for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            UserError::MalformedInput(_) | UserError::ValidationFailure(_) => {
                StatusCode::BAD_REQUEST
            }
            UserError::Conflict(_) => StatusCode::CONFLICT,
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!(status = status.as_u16(), "Request rejected: {}", self);

        // Clients get the bare status, no error payload
        status.into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the user service.
pub type Result<T> = std::result::Result<T, UserError>;
