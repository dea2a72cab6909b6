//! Integration test support for Clementine.
//!
//! Spawns the composed gateway (or a bare order service) on an ephemeral
//! port and drives it over real HTTP, so every test exercises the same
//! stack a deployment would: gateway routing, the order service's
//! validation round trip to the user service, and the stores behind them.
//!
//! # Test Categories
//!
//! - `user_service` - user directory and validation endpoint
//! - `order_service` - order creation end to end through the gateway
//! - `failure_modes` - remote validation failure classification
//! - `gateway` - composition and pass-through

use std::net::SocketAddr;

use axum::Router;
use serde_json::{Value, json};

use clementine_order_service::config::UserServiceClientConfig;

/// A gateway instance bound to an ephemeral port.
pub struct TestContext {
    /// HTTP client for driving the gateway.
    pub client: reqwest::Client,
    /// Root URL of the gateway (no trailing slash).
    pub base_url: String,
    /// Handle to the user service state, for seeding records the API
    /// cannot produce (e.g. inactive users).
    pub user_state: clementine_user_service::state::AppState,
}

impl TestContext {
    /// Spawn a gateway composing both services, with the order service's
    /// validation client pointed back at the gateway's own
    /// `/user-service` prefix.
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().expect("listener has no address");

        let user_state = clementine_user_service::state::AppState::new();
        let client_config = UserServiceClientConfig::new(
            format!("http://{addr}/user-service")
                .parse()
                .expect("valid loopback url"),
        );
        let order_state = clementine_order_service::state::AppState::new(&client_config);

        let app = clementine_gateway::router(user_state.clone(), order_state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server error");
        });

        Self {
            client: reqwest::Client::new(),
            base_url: format!("http://{addr}"),
            user_state,
        }
    }

    /// URL under the user service prefix.
    #[must_use]
    pub fn user_url(&self, path: &str) -> String {
        format!("{}/user-service{path}", self.base_url)
    }

    /// URL under the order service prefix.
    #[must_use]
    pub fn order_url(&self, path: &str) -> String {
        format!("{}/order-service{path}", self.base_url)
    }

    /// Create a user through the API and return the response body.
    pub async fn create_user(&self, username: &str, email: &str, full_name: &str) -> Value {
        let response = self
            .client
            .post(self.user_url("/users"))
            .json(&json!({
                "username": username,
                "email": email,
                "full_name": full_name,
            }))
            .send()
            .await
            .expect("create user request failed");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("create user body not json")
    }

    /// A well-formed order body for the given user.
    #[must_use]
    pub fn laptop_order(user_id: &str) -> Value {
        json!({
            "user_id": user_id,
            "items": [{
                "product_id": "prod1",
                "product_name": "Laptop",
                "quantity": 1,
                "price": "999.99",
            }],
            "shipping_address": "123 Main St",
        })
    }
}

/// Spawn a bare order service whose validation client uses the given
/// configuration. Used by failure-mode tests to point the client at stub
/// or dead endpoints.
pub async fn spawn_order_service(client_config: &UserServiceClientConfig) -> String {
    let state = clementine_order_service::state::AppState::new(client_config);
    let app = clementine_order_service::app(state);
    let addr = spawn_router(app).await;
    format!("http://{addr}")
}

/// Spawn any router on an ephemeral port and return its address.
pub async fn spawn_router(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().expect("listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });
    addr
}
