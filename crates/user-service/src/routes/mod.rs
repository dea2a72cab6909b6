//! Route handlers for the user service.

pub mod users;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::state::AppState;

/// Build the user service router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(users::router())
}

/// Service identity endpoint.
async fn root() -> Json<Value> {
    Json(json!({ "service": "User Service", "status": "running" }))
}

/// Liveness health check endpoint.
async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "user-service" }))
}
