//! Installation orchestration: database validation, persistence, and
//! pool swap.

use std::sync::Arc;

use tracing::info;

use skyvault_core::SettingsStore;
use skyvault_core::config::database::DatabaseConfig;
use skyvault_core::config::install::InstallState;
use skyvault_core::error::AppError;
use skyvault_core::result::AppResult;
use skyvault_database::migration::run_migrations;
use skyvault_database::{DatabaseHandle, DatabasePool, probe_connection};

/// Orchestrates the one-time database installation flow.
#[derive(Debug, Clone)]
pub struct InstallerService {
    /// Settings store holding the install state.
    settings: Arc<SettingsStore>,
    /// Slot for the live database pool.
    db: Arc<DatabaseHandle>,
}

impl InstallerService {
    /// Creates a new installer service.
    pub fn new(settings: Arc<SettingsStore>, db: Arc<DatabaseHandle>) -> Self {
        Self { settings, db }
    }

    /// Current install state.
    pub async fn install_state(&self) -> InstallState {
        self.settings.install_state().await
    }

    /// Validate and persist the database configuration, then bring the
    /// database online.
    ///
    /// Order of operations:
    ///
    /// 1. probe the candidate configuration with a one-shot connection;
    /// 2. open the real pool and apply the schema migrations;
    /// 3. persist the configuration and flip the install state;
    /// 4. attach the pool to the live handle.
    ///
    /// Nothing is persisted unless steps 1 and 2 succeed. The persisted
    /// transition happens at most once: a repeated or concurrent install
    /// loses the conditional write in the settings store and its freshly
    /// opened pool is closed again.
    pub async fn setup_database(&self, config: DatabaseConfig) -> AppResult<()> {
        if self.settings.install_state().await.is_installed() {
            return Err(AppError::conflict("System is already installed"));
        }

        probe_connection(&config).await?;

        let pool = DatabasePool::connect(&config).await?;
        if let Err(e) = run_migrations(&pool).await {
            pool.close().await;
            return Err(e);
        }

        if let Err(e) = self.settings.complete_install(config.clone()).await {
            pool.close().await;
            return Err(e);
        }

        if let Some(previous) = self.db.replace(pool).await {
            previous.close().await;
        }

        info!(driver = %config.driver, "Database installed and online");
        Ok(())
    }
}
