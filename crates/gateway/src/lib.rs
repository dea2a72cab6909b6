//! Clementine Gateway library.
//!
//! Mounts the user and order service routers under path prefixes on a
//! single port. Pure pass-through: no request or response translation
//! happens here.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the gateway router from the two service states.
///
/// The order service keeps talking to the user service over HTTP even
/// when both are mounted in one process; its client base URL should point
/// at this gateway's `/user-service` prefix.
#[must_use]
pub fn router(
    user_state: clementine_user_service::state::AppState,
    order_state: clementine_order_service::state::AppState,
) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/user-service", clementine_user_service::app(user_state))
        .nest("/order-service", clementine_order_service::app(order_state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Gateway identity endpoint.
async fn root() -> Json<Value> {
    Json(json!({ "service": "gateway", "status": "running" }))
}
