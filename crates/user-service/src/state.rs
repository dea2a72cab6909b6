//! Application state shared across handlers.

use std::sync::Arc;

use crate::directory::UserDirectory;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone, Default)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Default)]
struct AppStateInner {
    directory: UserDirectory,
}

impl AppState {
    /// Create a new application state with an empty user directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a reference to the user directory.
    #[must_use]
    pub fn directory(&self) -> &UserDirectory {
        &self.inner.directory
    }
}
