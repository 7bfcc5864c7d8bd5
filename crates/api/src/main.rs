//! Stylefeed API - In-memory social-commerce backend.
//!
//! This binary serves the JSON API on port 5000.
//!
//! # Architecture
//!
//! - Axum web framework, JSON responses only
//! - Process-memory entity store seeded at startup (no database)
//! - Relational joins (post+author, product+vendor, story groups)
//!   computed per request by the view layer
//!
//! Nothing survives a restart; the store reseeds on every boot.

#![cfg_attr(not(test), forbid(unsafe_code))]

use stylefeed_api::config::ApiConfig;
use stylefeed_api::routes;
use stylefeed_api::state::AppState;
use stylefeed_api::store::EntityStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ApiConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stylefeed_api=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Seed the entity store
    let store = EntityStore::seeded();
    tracing::info!(
        users = store.users().len(),
        products = store.products().len(),
        posts = store.posts().len(),
        stories = store.stories().len(),
        "Entity store seeded"
    );

    // Build application state and router
    let state = AppState::new(config.clone(), store);
    let app = routes::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("api listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {addr}: {e}"));

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
