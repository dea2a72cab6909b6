//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::UserServiceClientConfig;
use crate::store::OrderStore;
use crate::validation::UserServiceClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: OrderStore,
    validator: UserServiceClient,
}

impl AppState {
    /// Create a new application state with an empty order store and a
    /// validation client built from `config`.
    #[must_use]
    pub fn new(config: &UserServiceClientConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: OrderStore::new(),
                validator: UserServiceClient::new(config),
            }),
        }
    }

    /// Get a reference to the order store.
    #[must_use]
    pub fn store(&self) -> &OrderStore {
        &self.inner.store
    }

    /// Get a reference to the remote validation client.
    #[must_use]
    pub fn validator(&self) -> &UserServiceClient {
        &self.inner.validator
    }
}
