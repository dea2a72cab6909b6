//! Order service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ORDER_SERVICE_HOST` - Bind address (default: 127.0.0.1)
//! - `ORDER_SERVICE_PORT` - Listen port (default: 8001)
//! - `USER_SERVICE_URL` - Base URL of the user service
//!   (default: <http://localhost:8000>)
//! - `SERVICE_TIMEOUT` - Remote validation timeout in seconds (default: 5;
//!   unparsable values fall back to the default instead of failing startup)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default base URL of the user service.
const DEFAULT_USER_SERVICE_URL: &str = "http://localhost:8000";

/// Default remote validation timeout in seconds.
const DEFAULT_TIMEOUT_SECS: f64 = 5.0;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Order service application configuration.
#[derive(Debug, Clone)]
pub struct OrderServiceConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Remote user service client configuration
    pub user_service: UserServiceClientConfig,
}

/// Configuration for the remote validation client.
///
/// Read once at construction; not runtime-mutable.
#[derive(Debug, Clone)]
pub struct UserServiceClientConfig {
    /// Base URL of the user service
    pub base_url: Url,
    /// Timeout applied to each validation call
    pub timeout: Duration,
}

impl OrderServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host, port, or user service URL is
    /// present but unparsable. An unparsable timeout is not an error; it
    /// falls back to the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ORDER_SERVICE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("ORDER_SERVICE_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("ORDER_SERVICE_PORT", "8001")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("ORDER_SERVICE_PORT".to_string(), e.to_string())
            })?;

        let user_service = UserServiceClientConfig::from_env()?;

        Ok(Self {
            host,
            port,
            user_service,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl UserServiceClientConfig {
    /// Client configuration with the default timeout.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the validation call timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_or(DEFAULT_USER_SERVICE_URL)
    }

    /// Load the client configuration from the environment, with a caller
    /// supplied fallback base URL.
    ///
    /// The gateway uses this to default the base URL to its own
    /// `/user-service` prefix.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the resolved base URL is unparsable.
    pub fn from_env_or(default_base_url: &str) -> Result<Self, ConfigError> {
        let base_url = get_env_or_default("USER_SERVICE_URL", default_base_url)
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("USER_SERVICE_URL".to_string(), e.to_string())
            })?;

        let timeout = parse_timeout(std::env::var("SERVICE_TIMEOUT").ok().as_deref());

        Ok(Self { base_url, timeout })
    }
}

/// Parse the timeout variable, falling back to the default on bad input.
fn parse_timeout(raw: Option<&str>) -> Duration {
    let secs = match raw {
        None => DEFAULT_TIMEOUT_SECS,
        Some(value) => match value.parse::<f64>() {
            Ok(secs) if secs > 0.0 => secs,
            _ => {
                tracing::warn!(
                    value,
                    default = DEFAULT_TIMEOUT_SECS,
                    "invalid SERVICE_TIMEOUT, using default"
                );
                DEFAULT_TIMEOUT_SECS
            }
        },
    };
    Duration::from_secs_f64(secs)
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout_default() {
        assert_eq!(parse_timeout(None), Duration::from_secs(5));
    }

    #[test]
    fn test_parse_timeout_valid() {
        assert_eq!(parse_timeout(Some("2.5")), Duration::from_millis(2500));
    }

    #[test]
    fn test_parse_timeout_invalid_falls_back() {
        assert_eq!(parse_timeout(Some("not-a-number")), Duration::from_secs(5));
        assert_eq!(parse_timeout(Some("-1")), Duration::from_secs(5));
        assert_eq!(parse_timeout(Some("0")), Duration::from_secs(5));
    }

    #[test]
    fn test_client_config_defaults() {
        let config = UserServiceClientConfig::new("http://localhost:8000".parse().unwrap());
        assert_eq!(config.timeout, Duration::from_secs(5));

        let config = config.with_timeout(Duration::from_millis(100));
        assert_eq!(config.timeout, Duration::from_millis(100));
    }
}
