//! One-shot connection probe used by the installer.

use sqlx::{AnyConnection, Connection};
use tracing::debug;

use skyvault_core::config::database::DatabaseConfig;
use skyvault_core::error::{AppError, ErrorKind};
use skyvault_core::result::AppResult;

use crate::connection::mask_password;

/// Open a single connection, ping it, and close it again.
///
/// This validates a candidate database configuration before anything is
/// persisted. The connection never enters a pool and is closed before
/// the function returns, whether or not the ping succeeded.
pub async fn probe_connection(config: &DatabaseConfig) -> AppResult<()> {
    sqlx::any::install_default_drivers();

    let url = config.connect_url();
    debug!(
        driver = %config.driver,
        url = %mask_password(&url),
        "Probing database connection"
    );

    let mut conn = AnyConnection::connect(&url).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to connect to database: {e}"),
            e,
        )
    })?;

    let pinged = conn.ping().await;
    let closed = conn.close().await;

    pinged.map_err(|e| {
        AppError::with_source(ErrorKind::Database, format!("Database ping failed: {e}"), e)
    })?;
    closed.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to close probe connection: {e}"),
            e,
        )
    })?;

    debug!(driver = %config.driver, "Database probe succeeded");
    Ok(())
}
