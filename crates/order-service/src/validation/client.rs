//! HTTP client for the user service validation endpoint.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::{error, warn};

use clementine_core::{UserId, UserValidation};

use crate::config::UserServiceClientConfig;

use super::error::UserServiceError;

/// Client for the user service validation endpoint.
///
/// Base URL and timeout are fixed at construction. Each call is a single
/// independent outbound request: no retry, no caching, no circuit
/// breaking.
#[derive(Debug, Clone)]
pub struct UserServiceClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl UserServiceClient {
    /// Create a new validation client.
    #[must_use]
    pub fn new(config: &UserServiceClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.as_str().trim_end_matches('/').to_owned(),
            timeout: config.timeout,
        }
    }

    /// Ask the user service whether `user_id` is usable for order creation.
    ///
    /// A 200 response is parsed and returned as-is (the remote schema is
    /// trusted). 404 and every other non-success status collapse to an
    /// `is_valid: false` result; only transport-level failures surface as
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Timeout`] when the call exceeds the
    /// configured timeout, [`UserServiceError::Unavailable`] when the
    /// remote cannot be reached, and [`UserServiceError::Communication`]
    /// for any other transport or parse failure.
    pub async fn validate_user(
        &self,
        user_id: &UserId,
    ) -> Result<UserValidation, UserServiceError> {
        let url = format!("{}/users/{}/validate", self.base_url, user_id);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify)?;

        match response.status() {
            StatusCode::OK => response
                .json::<UserValidation>()
                .await
                .map_err(classify),
            StatusCode::NOT_FOUND => {
                warn!(user_id = %user_id, "user not found in user service");
                Ok(UserValidation::invalid(user_id.clone()))
            }
            status => {
                // Deliberate policy: semantic rejections are not escalated,
                // only connectivity failures are.
                error!(user_id = %user_id, %status, "user service returned unexpected status");
                Ok(UserValidation::invalid(user_id.clone()))
            }
        }
    }
}

/// Map a transport failure onto its classified variant.
fn classify(err: reqwest::Error) -> UserServiceError {
    if err.is_timeout() {
        error!(error = %err, "timeout while validating user");
        UserServiceError::Timeout
    } else if err.is_connect() {
        error!(error = %err, "cannot connect to user service");
        UserServiceError::Unavailable
    } else {
        error!(error = %err, "error validating user");
        UserServiceError::Communication(err.to_string())
    }
}
