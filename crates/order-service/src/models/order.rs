//! Order and line item records.
//!
//! Monetary amounts are `rust_decimal::Decimal` and travel as JSON strings,
//! so totals stay exact end to end.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use clementine_core::{OrderId, OrderStatus, ProductId, UserDetails, UserId};

/// A single line of an order. Embedded, not independently addressable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub price: Decimal,
}

impl LineItem {
    /// Quantity times unit price, exact under decimal arithmetic.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price
    }
}

/// An order record owned by the order store.
///
/// `total_amount` is computed once at creation from the line items and
/// never recomputed; the record is immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub user_id: UserId,
    /// Snapshot of the owning user's attributes captured at validation
    /// time; absent when the validation result carried none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_details: Option<UserDetails>,
    pub items: Vec<LineItem>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub shipping_address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Build a fresh pending order with a generated id, computed total,
    /// and matching creation/update timestamps.
    #[must_use]
    pub fn new(
        user_id: UserId,
        items: Vec<LineItem>,
        shipping_address: String,
        user_details: Option<UserDetails>,
    ) -> Self {
        let total_amount = items.iter().map(LineItem::subtotal).sum();
        let now = Utc::now();

        Self {
            order_id: OrderId::generate(),
            user_id,
            user_details,
            items,
            total_amount,
            status: OrderStatus::Pending,
            shipping_address,
            created_at: now,
            updated_at: now,
        }
    }
}
