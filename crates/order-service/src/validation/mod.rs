//! Remote user validation.
//!
//! The order service never inspects user records itself; it asks the user
//! service whether an id is usable for order creation and classifies the
//! ways that call can fail.

mod client;
mod error;

pub use client::UserServiceClient;
pub use error::UserServiceError;
