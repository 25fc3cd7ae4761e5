//! Persistent settings store backing the runtime configuration.
//!
//! The store owns the merged application configuration together with the
//! TOML file it was loaded from. Reads are served from the in-memory
//! copy; the only mutation, [`SettingsStore::complete_install`], persists
//! the new configuration to disk before the in-memory view is replaced.
//! A write that fails on disk leaves both the file and the in-memory view
//! untouched.

use std::path::{Path, PathBuf};

use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::config::database::DatabaseConfig;
use crate::config::install::InstallState;
use crate::error::{AppError, ErrorKind};
use crate::result::AppResult;

/// Shared, mutable view of the application settings.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    current: RwLock<AppConfig>,
}

impl SettingsStore {
    /// Load settings from `path`, merged with `SKYVAULT_`-prefixed
    /// environment variables.
    ///
    /// A missing file is not an error: every section falls back to its
    /// defaults and the install state starts out [`InstallState::Pending`].
    pub fn load(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let merged = config::Config::builder()
            .add_source(config::File::from(path.as_path()).required(false))
            .add_source(
                config::Environment::with_prefix("SKYVAULT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: AppConfig = merged
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        config.validate()?;

        Ok(Self {
            path,
            current: RwLock::new(config),
        })
    }

    /// Path of the backing settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A point-in-time copy of the full configuration.
    pub async fn snapshot(&self) -> AppConfig {
        self.current.read().await.clone()
    }

    /// Current install state.
    pub async fn install_state(&self) -> InstallState {
        self.current.read().await.install.state
    }

    /// The persisted database configuration, if any.
    pub async fn database(&self) -> Option<DatabaseConfig> {
        self.current.read().await.database.clone()
    }

    /// Persist the validated database configuration and mark the system
    /// installed.
    ///
    /// The transition is guarded: once the state is
    /// [`InstallState::Installed`] every further call fails with a
    /// conflict and the stored settings stay untouched. The file write
    /// happens under the write lock, so concurrent installers serialize
    /// here and exactly one of them wins.
    pub async fn complete_install(&self, database: DatabaseConfig) -> AppResult<()> {
        let mut current = self.current.write().await;
        if current.install.state.is_installed() {
            return Err(AppError::conflict("System is already installed"));
        }

        let mut next = current.clone();
        next.database = Some(database);
        next.install.state = InstallState::Installed;
        self.flush(&next).await?;
        *current = next;

        tracing::info!(path = %self.path.display(), "Settings persisted, install complete");
        Ok(())
    }

    /// Write the configuration to the backing file.
    ///
    /// The content goes to a sibling temp file first and is renamed into
    /// place, so a crash mid-write cannot leave a half-written settings
    /// file behind.
    async fn flush(&self, config: &AppConfig) -> AppResult<()> {
        let rendered = toml::to_string_pretty(config).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                "Failed to render settings as TOML",
                e,
            )
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Configuration,
                        "Failed to create settings directory",
                        e,
                    )
                })?;
            }
        }

        let tmp = self.path.with_extension("toml.tmp");
        tokio::fs::write(&tmp, rendered).await.map_err(|e| {
            AppError::with_source(ErrorKind::Configuration, "Failed to write settings file", e)
        })?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(AppError::with_source(
                ErrorKind::Configuration,
                "Failed to replace settings file",
                e,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::database::DatabaseDriver;

    #[tokio::test]
    async fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::load(dir.path().join("skyvault.toml")).unwrap();

        assert_eq!(store.install_state().await, InstallState::Pending);
        assert!(store.database().await.is_none());
    }

    #[tokio::test]
    async fn complete_install_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skyvault.toml");
        let store = SettingsStore::load(&path).unwrap();

        store
            .complete_install(DatabaseConfig::new(DatabaseDriver::Sqlite, "file.db"))
            .await
            .unwrap();
        assert_eq!(store.install_state().await, InstallState::Installed);
        assert!(path.exists());

        let reloaded = SettingsStore::load(&path).unwrap();
        assert_eq!(reloaded.install_state().await, InstallState::Installed);
        let database = reloaded.database().await.expect("database section");
        assert_eq!(database.driver, DatabaseDriver::Sqlite);
        assert_eq!(database.dsn, "file.db");
    }

    #[tokio::test]
    async fn second_install_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skyvault.toml");
        let store = SettingsStore::load(&path).unwrap();

        store
            .complete_install(DatabaseConfig::new(DatabaseDriver::Sqlite, "first.db"))
            .await
            .unwrap();
        let err = store
            .complete_install(DatabaseConfig::new(DatabaseDriver::Sqlite, "second.db"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        let reloaded = SettingsStore::load(&path).unwrap();
        assert_eq!(reloaded.database().await.unwrap().dsn, "first.db");
    }

    #[tokio::test]
    async fn failed_flush_leaves_state_untouched() {
        let dir = tempfile::tempdir().unwrap();
        // A directory squatting on the settings path makes the final
        // rename fail.
        let path = dir.path().join("skyvault.toml");
        std::fs::create_dir(&path).unwrap();

        let store = SettingsStore::load(&path).unwrap();
        let err = store
            .complete_install(DatabaseConfig::new(DatabaseDriver::Sqlite, "file.db"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert_eq!(store.install_state().await, InstallState::Pending);
        assert!(store.database().await.is_none());
    }
}
