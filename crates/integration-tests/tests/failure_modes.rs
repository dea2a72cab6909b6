//! Remote validation failure classification, observed from the outside.
//!
//! Each test spawns a bare order service pointed at a stub (or absent)
//! user service and asserts the caller-visible status: transport failures
//! are 503, semantic rejections are 400, and nothing is ever persisted on
//! a failed creation.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use axum::http::StatusCode as AxumStatusCode;
use axum::routing::get;
use axum::{Json, Router};
use reqwest::StatusCode;
use serde_json::{Value, json};

use clementine_core::{UserId, UserValidation};
use clementine_integration_tests::{TestContext, spawn_order_service, spawn_router};
use clementine_order_service::config::UserServiceClientConfig;

async fn post_laptop_order(base_url: &str) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{base_url}/orders"))
        .json(&TestContext::laptop_order("user123"))
        .send()
        .await
        .unwrap()
}

async fn order_count(base_url: &str) -> usize {
    let body: Value = reqwest::Client::new()
        .get(format!("{base_url}/orders"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    body.as_array().unwrap().len()
}

#[tokio::test]
async fn slow_user_service_yields_503_and_no_order() {
    let stub = Router::new().route(
        "/users/{user_id}/validate",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "user_id": "user123", "is_valid": true }))
        }),
    );
    let stub_addr = spawn_router(stub).await;

    let config = UserServiceClientConfig::new(format!("http://{stub_addr}").parse().unwrap())
        .with_timeout(Duration::from_millis(100));
    let base_url = spawn_order_service(&config).await;

    let response = post_laptop_order(&base_url).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    assert_eq!(order_count(&base_url).await, 0);
}

#[tokio::test]
async fn unreachable_user_service_yields_503() {
    // Bind then drop to obtain an address nothing is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = listener.local_addr().unwrap();
    drop(listener);

    let config = UserServiceClientConfig::new(format!("http://{dead_addr}").parse().unwrap());
    let base_url = spawn_order_service(&config).await;

    let response = post_laptop_order(&base_url).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    assert_eq!(order_count(&base_url).await, 0);
}

#[tokio::test]
async fn user_service_500_collapses_to_rejection() {
    // Named policy: non-200/404 statuses from the remote are treated as
    // "invalid user", not as a service error.
    let stub = Router::new().route(
        "/users/{user_id}/validate",
        get(|| async { AxumStatusCode::INTERNAL_SERVER_ERROR }),
    );
    let stub_addr = spawn_router(stub).await;

    let config = UserServiceClientConfig::new(format!("http://{stub_addr}").parse().unwrap());
    let base_url = spawn_order_service(&config).await;

    let response = post_laptop_order(&base_url).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(order_count(&base_url).await, 0);
}

#[tokio::test]
async fn valid_stub_response_is_trusted_as_is() {
    let stub = Router::new().route(
        "/users/{user_id}/validate",
        get(|| async {
            Json(UserValidation {
                user_id: UserId::new("user123"),
                is_valid: true,
                user_details: None,
            })
        }),
    );
    let stub_addr = spawn_router(stub).await;

    let config = UserServiceClientConfig::new(format!("http://{stub_addr}").parse().unwrap());
    let base_url = spawn_order_service(&config).await;

    let response = post_laptop_order(&base_url).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // The snapshot is whatever the remote sent - here, nothing.
    let body: Value = response.json().await.unwrap();
    assert!(body.get("user_details").is_none());
}
