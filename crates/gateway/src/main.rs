//! Clementine Gateway - single-port composition binary.
//!
//! Exposes both services on one port:
//! - `/user-service/*` - user management and validation
//! - `/order-service/*` - order management
//!
//! The order service still validates users over HTTP; unless
//! `USER_SERVICE_URL` says otherwise, its client is pointed back at this
//! gateway's own `/user-service` prefix.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clementine_gateway::config::GatewayConfig;
use clementine_order_service::config::UserServiceClientConfig;

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "clementine_gateway=info,clementine_user_service=info,clementine_order_service=info,tower_http=debug"
            .into()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from_env().expect("Failed to load configuration");

    let loopback_prefix = format!("http://{}/user-service", config.socket_addr());
    let client_config = UserServiceClientConfig::from_env_or(&loopback_prefix)
        .expect("Failed to load validation client configuration");
    tracing::info!(
        user_service = %client_config.base_url,
        timeout = ?client_config.timeout,
        "validation client configured"
    );

    let user_state = clementine_user_service::state::AppState::new();
    let order_state = clementine_order_service::state::AppState::new(&client_config);

    let app = clementine_gateway::router(user_state, order_state);

    let addr = config.socket_addr();
    tracing::info!("gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
