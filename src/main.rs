//! SkyVault Server — self-hosted cloud storage administration service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use skyvault_api::AppState;
use skyvault_core::SettingsStore;
use skyvault_core::config::AppConfig;
use skyvault_core::error::AppError;
use skyvault_database::{DatabaseHandle, DatabasePool};

#[tokio::main]
async fn main() {
    let settings = match load_settings() {
        Ok(s) => Arc::new(s),
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let config = settings.snapshot().await;
    init_logging(&config);

    if let Err(e) = run(settings, config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load the settings store from file and environment
fn load_settings() -> Result<SettingsStore, AppError> {
    let config_path =
        std::env::var("SKYVAULT_CONFIG").unwrap_or_else(|_| "config/skyvault.toml".to_string());

    SettingsStore::load(config_path)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(settings: Arc<SettingsStore>, config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting SkyVault v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Attach the database when already installed ───────
    let db = Arc::new(DatabaseHandle::empty());
    match settings.database().await {
        Some(db_config) => {
            tracing::info!("Connecting to database...");
            let pool = DatabasePool::connect(&db_config).await?;

            tracing::info!("Running database migrations...");
            skyvault_database::migration::run_migrations(&pool).await?;

            db.replace(pool).await;
            tracing::info!("Database online");
        }
        None => {
            tracing::warn!("No database configured; complete setup via PUT /system/database");
        }
    }

    // ── Step 2: Build application state ──────────────────────────
    let state = AppState::new(Arc::clone(&settings), Arc::clone(&db));

    // ── Step 3: Build the router ─────────────────────────────────
    let app = skyvault_api::build_router(state, &config.server.cors);

    // ── Step 4: Start the HTTP server ────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!(
        "SkyVault server listening on {} (install state: {})",
        addr,
        config.install.state
    );

    // ── Step 5: Run until shutdown ───────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    if let Some(pool) = db.get().await {
        pool.close().await;
    }

    tracing::info!("SkyVault server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
