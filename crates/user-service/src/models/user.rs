//! User record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clementine_core::{Email, UserDetails, UserId, Username};

/// A user record owned by the user directory.
///
/// Created once and never updated or deleted through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub username: Username,
    pub email: Email,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl User {
    /// Build a fresh user record with a generated id and timestamp.
    ///
    /// New users are active by default.
    #[must_use]
    pub fn new(username: Username, email: Email, full_name: String) -> Self {
        Self {
            user_id: UserId::generate(),
            username,
            email,
            full_name,
            created_at: Utc::now(),
            is_active: true,
        }
    }

    /// Snapshot of the attributes embedded into orders at validation time.
    #[must_use]
    pub fn details(&self) -> UserDetails {
        UserDetails {
            username: self.username.clone(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            Username::parse("johndoe").unwrap(),
            Email::parse("john@example.com").unwrap(),
            "John Doe".to_string(),
        )
    }

    #[test]
    fn test_new_user_is_active() {
        let user = sample_user();
        assert!(user.is_active);
    }

    #[test]
    fn test_details_snapshot_matches_user() {
        let user = sample_user();
        let details = user.details();
        assert_eq!(details.username, user.username);
        assert_eq!(details.email, user.email);
        assert_eq!(details.full_name, user.full_name);
    }
}
