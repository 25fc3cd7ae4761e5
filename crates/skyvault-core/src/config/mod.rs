//! Application configuration schemas.
//!
//! All configuration structs are deserialized from the TOML settings file
//! via the `config` crate. Each sub-module represents a logical
//! configuration section. Runtime access and write-back go through the
//! [`store::SettingsStore`].

pub mod database;
pub mod install;
pub mod logging;
pub mod server;
pub mod store;

use serde::{Deserialize, Serialize};

use self::database::DatabaseConfig;
use self::install::InstallConfig;
use self::logging::LoggingConfig;
use self::server::ServerConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the settings
/// file merged with environment variable overrides. Before installation
/// the `[database]` section is absent; the installer writes it together
/// with the flipped install state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings, present once installed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
    /// Installation state.
    #[serde(default)]
    pub install: InstallConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Cross-field validation of the merged configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.install.state.is_installed() && self.database.is_none() {
            return Err(AppError::configuration(
                "Install state is 'installed' but no [database] section is present",
            ));
        }
        Ok(())
    }
}
