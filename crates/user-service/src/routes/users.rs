//! User management and validation handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;

use clementine_core::{Email, UserId, UserValidation, Username};

use crate::error::Result;
use crate::models::User;
use crate::state::AppState;

/// Build the users router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route("/users/{user_id}", get(get_user))
        .route("/users/{user_id}/validate", get(validate_user))
}

/// Request body for creating a user.
///
/// Fields arrive as raw strings; username and email are validated here at
/// the boundary before any record is built.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub full_name: String,
}

/// Create a new user.
///
/// # Errors
///
/// Returns 422 if the username or email fails validation.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let username = Username::parse(&body.username)?;
    let email = Email::parse(&body.email)?;

    tracing::info!(username = %username, "creating user");
    let user = state
        .directory()
        .create(username, email, body.full_name)
        .await;
    tracing::info!(user_id = %user.user_id, "user created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Fetch a user by id.
///
/// # Errors
///
/// Returns 404 if no user with the given id exists.
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<User>> {
    state
        .directory()
        .get(&user_id)
        .await
        .map(Json)
        .ok_or_else(|| {
            crate::error::AppError::NotFound(format!("User with id {user_id} not found"))
        })
}

/// List all users.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.directory().list_all().await)
}

/// Validate a user id for order creation.
///
/// Always returns 200. An absent user yields `is_valid: false` with no
/// details; a present user yields its active flag plus a details snapshot,
/// even when the flag is false.
pub async fn validate_user(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Json<UserValidation> {
    tracing::info!(user_id = %user_id, "validating user");
    match state.directory().get(&user_id).await {
        None => {
            tracing::warn!(user_id = %user_id, "user not found");
            Json(UserValidation::invalid(user_id))
        }
        Some(user) => Json(UserValidation {
            user_id,
            is_valid: user.is_active,
            user_details: Some(user.details()),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::models::User;

    fn app(state: AppState) -> Router {
        crate::routes::routes().with_state(state)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::String(
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        };
        (status, body)
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let state = AppState::new();
        let body = json!({
            "username": "johndoe",
            "email": "john@example.com",
            "full_name": "John Doe"
        });

        let (status, body) = send(app(state), post_json("/users", &body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["username"], "johndoe");
        assert_eq!(body["is_active"], true);
        assert!(body["user_id"].is_string());
    }

    #[tokio::test]
    async fn test_create_user_invalid_email() {
        let state = AppState::new();
        let body = json!({
            "username": "johndoe",
            "email": "invalid-email",
            "full_name": "John Doe"
        });

        let (status, _) = send(app(state), post_json("/users", &body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_user_short_username() {
        let state = AppState::new();
        let body = json!({
            "username": "jd",
            "email": "jd@example.com",
            "full_name": "J D"
        });

        let (status, _) = send(app(state), post_json("/users", &body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let state = AppState::new();
        let request = Request::get("/users/nonexistent-id")
            .body(Body::empty())
            .unwrap();

        let (status, _) = send(app(state), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_validate_unknown_user_is_invalid() {
        let state = AppState::new();
        let request = Request::get("/users/invalid-id/validate")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app(state), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_valid"], false);
        assert!(body.get("user_details").is_none());
    }

    #[tokio::test]
    async fn test_validate_inactive_user_keeps_details() {
        let state = AppState::new();
        let mut user = User::new(
            Username::parse("dormant").unwrap(),
            Email::parse("dormant@example.com").unwrap(),
            "Dormant User".to_string(),
        );
        user.is_active = false;
        state.directory().insert(user.clone()).await;

        let request = Request::get(format!("/users/{}/validate", user.user_id))
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app(state), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_valid"], false);
        assert_eq!(body["user_details"]["username"], "dormant");
    }

    #[tokio::test]
    async fn test_health_check() {
        let state = AppState::new();
        let request = Request::get("/health").body(Body::empty()).unwrap();

        let (status, body) = send(app(state), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "user-service");
    }
}
