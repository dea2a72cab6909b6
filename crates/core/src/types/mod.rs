//! Core types for Clementine.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod status;
pub mod username;
pub mod validation;

pub use email::{Email, EmailError};
pub use id::*;
pub use status::OrderStatus;
pub use username::{Username, UsernameError};
pub use validation::{UserDetails, UserValidation};
