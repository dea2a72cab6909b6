//! Unified error handling for the order service.
//!
//! All route handlers return `Result<T, AppError>`; the `IntoResponse`
//! implementation maps each variant to its status code. Transport-level
//! validation failures carry their classification through
//! [`UserServiceError`] and all surface as 503.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use clementine_core::UserId;

use crate::validation::UserServiceError;

/// Application-level error type for the order service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Remote validation reported the user invalid or absent.
    #[error("Invalid user: User {0} does not exist or is inactive")]
    InvalidUser(UserId),

    /// The validation call itself failed at the transport level.
    #[error("Service error: {0}")]
    UserService(#[from] UserServiceError),

    /// Requested entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Malformed request input.
    #[error("invalid request: {0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::UserService(_)) {
            tracing::error!(error = %self, "order request failed");
        }

        let status = match &self {
            Self::InvalidUser(_) => StatusCode::BAD_REQUEST,
            Self::UserService(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        (status, self.to_string()).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::InvalidUser(UserId::new("u1"))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::UserService(UserServiceError::Timeout)),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            get_status(AppError::UserService(UserServiceError::Unavailable)),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            get_status(AppError::NotFound("order x".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Validation("bad input".to_string())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_invalid_user_message_names_user() {
        let err = AppError::InvalidUser(UserId::new("user123"));
        assert_eq!(
            err.to_string(),
            "Invalid user: User user123 does not exist or is inactive"
        );
    }
}
