//! Validation wire types exchanged between the order and user services.

use serde::{Deserialize, Serialize};

use crate::types::email::Email;
use crate::types::id::UserId;
use crate::types::username::Username;

/// Denormalized snapshot of a user's attributes.
///
/// Captured at validation time and embedded in the order record; never
/// refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub username: Username,
    pub email: Email,
    pub full_name: String,
}

/// Result of a user validation lookup.
///
/// Transient: produced fresh on every validation call and never persisted
/// or cached. `user_details` is present whenever the user record exists,
/// even when the user is inactive - validity is driven solely by the
/// active flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserValidation {
    pub user_id: UserId,
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_details: Option<UserDetails>,
}

impl UserValidation {
    /// A negative result for a user that does not exist.
    #[must_use]
    pub const fn invalid(user_id: UserId) -> Self {
        Self {
            user_id,
            is_valid: false,
            user_details: None,
        }
    }
}
