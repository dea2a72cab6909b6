//! Order creation end to end through the gateway.
//!
//! Every order creation here performs a real HTTP validation round trip
//! from the order service to the user service.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use serde_json::{Value, json};

use clementine_core::{Email, Username};
use clementine_integration_tests::TestContext;
use clementine_user_service::models::User;

#[tokio::test]
async fn create_order_for_valid_user() {
    let ctx = TestContext::spawn().await;
    let user = ctx
        .create_user("johndoe", "john@example.com", "John Doe")
        .await;
    let user_id = user["user_id"].as_str().unwrap();

    let response = ctx
        .client
        .post(ctx.order_url("/orders"))
        .json(&TestContext::laptop_order(user_id))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user_id"], *user_id);
    assert_eq!(body["total_amount"], "999.99");
    assert_eq!(body["status"], "pending");
    assert_eq!(body["user_details"]["username"], "johndoe");
    assert!(body["order_id"].is_string());
}

#[tokio::test]
async fn total_amount_is_exact_over_line_items() {
    let ctx = TestContext::spawn().await;
    let user = ctx
        .create_user("shopper", "shopper@example.com", "Big Shopper")
        .await;
    let user_id = user["user_id"].as_str().unwrap();

    let order = json!({
        "user_id": user_id,
        "items": [
            {"product_id": "prod1", "product_name": "Book", "quantity": 3, "price": "19.99"},
            {"product_id": "prod2", "product_name": "Pen", "quantity": 2, "price": "1.50"},
        ],
        "shipping_address": "456 Oak Ave",
    });

    let body: Value = ctx
        .client
        .post(ctx.order_url("/orders"))
        .json(&order)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // 3 x 19.99 + 2 x 1.50 = 62.97, exactly.
    assert_eq!(body["total_amount"], "62.97");
}

#[tokio::test]
async fn create_order_for_unknown_user_is_rejected() {
    let ctx = TestContext::spawn().await;

    let response = ctx
        .client
        .post(ctx.order_url("/orders"))
        .json(&TestContext::laptop_order("nonexistent"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let message = response.text().await.unwrap();
    assert!(message.contains("nonexistent"));

    // Nothing was persisted.
    let orders: Value = ctx
        .client
        .get(ctx.order_url("/orders"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(orders.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_order_for_inactive_user_is_rejected() {
    let ctx = TestContext::spawn().await;
    let mut user = User::new(
        Username::parse("dormant").unwrap(),
        Email::parse("dormant@example.com").unwrap(),
        "Dormant User".to_string(),
    );
    user.is_active = false;
    ctx.user_state.directory().insert(user.clone()).await;

    let response = ctx
        .client
        .post(ctx.order_url("/orders"))
        .json(&TestContext::laptop_order(user.user_id.as_str()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_order_with_zero_quantity_is_rejected_before_validation() {
    let ctx = TestContext::spawn().await;

    let order = json!({
        "user_id": "whoever",
        "items": [{
            "product_id": "prod1",
            "product_name": "Laptop",
            "quantity": 0,
            "price": "999.99",
        }],
        "shipping_address": "123 Main St",
    });

    let response = ctx
        .client
        .post(ctx.order_url("/orders"))
        .json(&order)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_order_twice_is_byte_identical() {
    let ctx = TestContext::spawn().await;
    let user = ctx
        .create_user("reader", "reader@example.com", "Repeat Reader")
        .await;
    let user_id = user["user_id"].as_str().unwrap();

    let created: Value = ctx
        .client
        .post(ctx.order_url("/orders"))
        .json(&TestContext::laptop_order(user_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let order_id = created["order_id"].as_str().unwrap();

    let url = ctx.order_url(&format!("/orders/{order_id}"));
    let first = ctx
        .client
        .get(&url)
        .send()
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();
    let second = ctx
        .client
        .get(&url)
        .send()
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn get_unknown_order_is_404() {
    let ctx = TestContext::spawn().await;

    let response = ctx
        .client
        .get(ctx.order_url("/orders/nonexistent-id"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_orders_by_user_filters() {
    let ctx = TestContext::spawn().await;
    let user = ctx
        .create_user("collector", "collector@example.com", "Order Collector")
        .await;
    let user_id = user["user_id"].as_str().unwrap();

    for _ in 0..2 {
        let response = ctx
            .client
            .post(ctx.order_url("/orders"))
            .json(&TestContext::laptop_order(user_id))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let body: Value = ctx
        .client
        .get(ctx.order_url(&format!("/users/{user_id}/orders")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.as_array().unwrap().len(), 2);

    let body: Value = ctx
        .client
        .get(ctx.order_url("/users/somebody-else/orders"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn health_check() {
    let ctx = TestContext::spawn().await;

    let body: Value = ctx
        .client
        .get(ctx.order_url("/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "order-service");
}
