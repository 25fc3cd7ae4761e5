//! System option management.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use skyvault_core::error::AppError;
use skyvault_core::result::AppResult;
use skyvault_database::DatabaseHandle;
use skyvault_database::repositories::OptionRepository;
use skyvault_entity::option::SystemOption;

/// Longest accepted option name.
const MAX_NAME_LEN: usize = 64;

/// Reads and writes named system options.
#[derive(Debug, Clone)]
pub struct OptionService {
    /// Slot for the live database pool.
    db: Arc<DatabaseHandle>,
}

impl OptionService {
    /// Creates a new option service.
    pub fn new(db: Arc<DatabaseHandle>) -> Self {
        Self { db }
    }

    /// Fetch an option by name.
    ///
    /// An unknown name is a not-found error, never a server fault.
    pub async fn get(&self, name: &str) -> AppResult<SystemOption> {
        let name = validate_name(name)?;
        let repo = self.repo().await?;
        repo.find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Option '{name}' not found")))
    }

    /// Create or replace an option. Payloads must be JSON objects;
    /// scalars and arrays are rejected.
    pub async fn set(&self, name: &str, value: &Value) -> AppResult<()> {
        let name = validate_name(name)?;
        if !value.is_object() {
            return Err(AppError::validation("Option value must be a JSON object"));
        }

        let repo = self.repo().await?;
        repo.upsert(name, value).await?;
        info!(option = name, "System option updated");
        Ok(())
    }

    async fn repo(&self) -> AppResult<OptionRepository> {
        Ok(OptionRepository::new(self.db.require().await?))
    }
}

fn validate_name(name: &str) -> AppResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Option name must not be empty"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "Option name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(name)
}
