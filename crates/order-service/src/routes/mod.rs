//! Route handlers for the order service.

pub mod orders;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::state::AppState;

/// Build the order service router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(orders::router())
}

/// Service identity endpoint.
async fn root() -> Json<Value> {
    Json(json!({ "service": "Order Service", "status": "running" }))
}

/// Liveness health check endpoint.
async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "order-service" }))
}
