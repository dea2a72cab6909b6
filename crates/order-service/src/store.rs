//! In-memory order store.
//!
//! Same injectable shape as the user directory: constructed at process
//! start, carried in the application state, fresh per test server.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use clementine_core::{OrderId, UserDetails, UserId};

use crate::models::{LineItem, Order};

/// Keyed store of order records.
///
/// Cheaply cloneable; clones share the same underlying map. Records are
/// immutable after creation.
#[derive(Clone, Default)]
pub struct OrderStore {
    inner: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl OrderStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new order record and store it.
    ///
    /// Always succeeds: validation is the orchestrator's responsibility
    /// and has already happened by the time this is called. The total is
    /// computed here, once.
    pub async fn create(
        &self,
        user_id: UserId,
        items: Vec<LineItem>,
        shipping_address: String,
        user_details: Option<UserDetails>,
    ) -> Order {
        let order = Order::new(user_id, items, shipping_address, user_details);
        self.inner
            .write()
            .await
            .insert(order.order_id.clone(), order.clone());
        order
    }

    /// Look up an order by id.
    pub async fn get(&self, order_id: &OrderId) -> Option<Order> {
        self.inner.read().await.get(order_id).cloned()
    }

    /// List the orders belonging to one user. Order is unspecified.
    pub async fn list_by_user(&self, user_id: &UserId) -> Vec<Order> {
        self.inner
            .read()
            .await
            .values()
            .filter(|order| &order.user_id == user_id)
            .cloned()
            .collect()
    }

    /// List every stored order. Order is unspecified.
    pub async fn list_all(&self) -> Vec<Order> {
        self.inner.read().await.values().cloned().collect()
    }
}
