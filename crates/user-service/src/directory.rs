//! In-memory user directory.
//!
//! An injectable store object constructed at process start and carried in
//! the application state, so tests get isolation for free by building a
//! fresh directory per server.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use clementine_core::{Email, UserId, Username};

use crate::models::User;

/// Keyed store of user records.
///
/// Cheaply cloneable; clones share the same underlying map. Records are
/// immutable once inserted, so concurrent readers never observe partial
/// state.
#[derive(Clone, Default)]
pub struct UserDirectory {
    inner: Arc<RwLock<HashMap<UserId, User>>>,
}

impl UserDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new user record and store it.
    ///
    /// Always succeeds: no uniqueness constraints exist on username or
    /// email. The generated record is returned.
    pub async fn create(&self, username: Username, email: Email, full_name: String) -> User {
        let user = User::new(username, email, full_name);
        self.insert(user.clone()).await;
        user
    }

    /// Insert a prebuilt record, replacing any record with the same id.
    ///
    /// Store primitive used by [`create`](Self::create) and by tests that
    /// need to seed records the API cannot produce (e.g. inactive users).
    pub async fn insert(&self, user: User) {
        self.inner.write().await.insert(user.user_id.clone(), user);
    }

    /// Look up a user by id.
    pub async fn get(&self, user_id: &UserId) -> Option<User> {
        self.inner.read().await.get(user_id).cloned()
    }

    /// List every stored user. Order is unspecified.
    pub async fn list_all(&self) -> Vec<User> {
        self.inner.read().await.values().cloned().collect()
    }
}
