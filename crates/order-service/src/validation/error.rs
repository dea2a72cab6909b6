//! Classified failures of the remote validation call.

use thiserror::Error;

/// Errors that can occur while talking to the user service.
///
/// These cover transport failures only. Semantic outcomes - user absent,
/// user inactive, or any non-success status from the remote - are returned
/// as a normal `UserValidation` with `is_valid: false`, never as an error.
#[derive(Debug, Error)]
pub enum UserServiceError {
    /// The validation call exceeded the configured timeout.
    #[error("user service timeout - please try again")]
    Timeout,

    /// The user service could not be reached.
    #[error("user service unavailable")]
    Unavailable,

    /// Any other transport or response-parsing failure.
    #[error("error communicating with user service: {0}")]
    Communication(String),
}
