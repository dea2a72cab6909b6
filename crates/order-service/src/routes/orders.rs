//! Order management handlers.
//!
//! Order creation is the one piece with real control flow: validate the
//! owning user against the remote user service, then persist. Nothing is
//! stored when validation rejects or the remote call fails.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use clementine_core::{OrderId, UserId};

use crate::error::{AppError, Result};
use crate::models::{LineItem, Order};
use crate::state::AppState;

/// Build the orders router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order).get(list_orders))
        .route("/orders/{order_id}", get(get_order))
        .route("/users/{user_id}/orders", get(list_user_orders))
}

/// Request body for creating an order.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: UserId,
    pub items: Vec<LineItem>,
    pub shipping_address: String,
}

/// Create a new order for a validated user.
///
/// # Errors
///
/// Returns 422 for non-positive quantities or prices, 400 when the remote
/// validation reports the user invalid or absent, and 503 when the user
/// service cannot be reached in time.
pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>)> {
    validate_items(&body.items)?;

    tracing::info!(user_id = %body.user_id, "validating user with user service");
    let validation = state.validator().validate_user(&body.user_id).await?;

    if !validation.is_valid {
        return Err(AppError::InvalidUser(body.user_id));
    }

    tracing::info!(user_id = %body.user_id, "creating order for validated user");
    let order = state
        .store()
        .create(
            body.user_id,
            body.items,
            body.shipping_address,
            validation.user_details,
        )
        .await;
    tracing::info!(order_id = %order.order_id, "order created");

    Ok((StatusCode::CREATED, Json(order)))
}

/// Reject non-positive quantities and prices at the boundary.
fn validate_items(items: &[LineItem]) -> Result<()> {
    for item in items {
        if item.quantity == 0 {
            return Err(AppError::Validation(format!(
                "quantity must be greater than zero for product {}",
                item.product_id
            )));
        }
        if item.price <= Decimal::ZERO {
            return Err(AppError::Validation(format!(
                "price must be greater than zero for product {}",
                item.product_id
            )));
        }
    }
    Ok(())
}

/// Fetch an order by id.
///
/// # Errors
///
/// Returns 404 if no order with the given id exists.
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<OrderId>,
) -> Result<Json<Order>> {
    state
        .store()
        .get(&order_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Order with id {order_id} not found")))
}

/// List all orders.
pub async fn list_orders(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.store().list_all().await)
}

/// List the orders belonging to one user.
pub async fn list_user_orders(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Json<Vec<Order>> {
    Json(state.store().list_by_user(&user_id).await)
}
