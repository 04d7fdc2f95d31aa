//! # Axum Scaffold API Server
//!
//! Starter scaffold for a CRUD web API: Axum wired to PostgreSQL via sqlx,
//! with migration tooling and container packaging.
//!
//! ## Startup sequence
//!
//! 1. Initialize tracing
//! 2. Load configuration from the environment
//! 3. Connect to the database with bounded retries (fail-fast on exhaustion)
//! 4. Run pending migrations
//! 5. Serve HTTP until a shutdown signal arrives
//!
//! ## Usage
//!
//! ```bash
//! cargo run
//! ```

use axum_scaffold::{
    app::{build_router, AppState},
    config::Config,
    db,
};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "axum_scaffold=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Axum Scaffold v{} starting...", axum_scaffold::VERSION);

    let config = Config::from_env()?;
    tracing::info!(environment = %config.environment, "Configuration loaded");

    // Connect to the database; the process exits if the retry budget runs out
    let db_config = db::pool::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    };
    let retry = db::pool::RetryPolicy {
        max_attempts: config.database.max_retries,
        base_delay: Duration::from_millis(config.database.retry_base_delay_ms),
        max_delay: Duration::from_millis(config.database.retry_max_delay_ms),
    };

    let pool = db::pool::connect_with_retry(db_config, retry)
        .await
        .map_err(|err| {
            anyhow::anyhow!("failed to connect to the database after multiple attempts: {err}")
        })?;

    db::migrations::run_migrations(&pool).await?;

    // Build Axum application
    let state = AppState::new(pool.clone(), config.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db::pool::close_pool(pool).await;
    tracing::info!("Shutdown complete");

    Ok(())
}

/// Resolves once a shutdown signal is received
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received, draining...");
}
