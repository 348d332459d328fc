//! Souk server - catalog API and admin CRUD surface.
//!
//! # Architecture
//!
//! - Axum web framework serving a JSON API
//! - Product catalog persisted as a single JSON document on disk
//! - Analytics rankings derived from like/order counters in that document
//! - imgbb as the external image host (the catalog stores hosted URLs only)
//! - WhatsApp deep links for checkout handoff (no payment processing)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use souk_server::catalog::JsonCatalog;
use souk_server::config::ServerConfig;
use souk_server::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "souk_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build application state over the JSON-file catalog
    let catalog = Arc::new(JsonCatalog::new(config.data_file.clone()));
    tracing::info!(path = %catalog.path().display(), "catalog opened");

    let state = AppState::new(config.clone(), catalog);
    let app = souk_server::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("souk server listening on {}", addr);

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
