//! Unified error handling for the user service.
//!
//! All route handlers return `Result<T, AppError>`; the `IntoResponse`
//! implementation maps each variant to its status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use clementine_core::{EmailError, UsernameError};

/// Application-level error type for the user service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Requested entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Submitted email failed mailbox-syntax validation.
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),

    /// Submitted username failed length validation.
    #[error("invalid username: {0}")]
    Username(#[from] UsernameError),

    /// Other malformed request input.
    #[error("invalid request: {0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Email(_) | Self::Username(_) | Self::Validation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        };

        (status, self.to_string()).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
