//! System option repository implementation.

use chrono::Utc;

use skyvault_core::error::{AppError, ErrorKind};
use skyvault_core::result::AppResult;
use skyvault_entity::option::SystemOption;

use crate::connection::DatabasePool;

/// Repository for named system options.
#[derive(Debug, Clone)]
pub struct OptionRepository {
    db: DatabasePool,
}

impl OptionRepository {
    /// Create a new option repository.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }

    /// Find an option by its unique name.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<SystemOption>> {
        sqlx::query_as::<_, SystemOption>(
            &self
                .db
                .rebind("SELECT * FROM system_options WHERE name = $1"),
        )
        .bind(name)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find option", e))
    }

    /// Insert or update an option by name.
    ///
    /// Last write wins. The update-then-insert dance stands in for a
    /// native upsert, whose syntax differs across the supported drivers;
    /// a concurrent insert between the two steps surfaces as a unique
    /// violation and is retried as an update.
    pub async fn upsert(&self, name: &str, value: &serde_json::Value) -> AppResult<()> {
        let payload = serde_json::to_string(value)?;
        let now = Utc::now().to_rfc3339();

        if self.try_update(name, &payload, &now).await? {
            return Ok(());
        }

        let inserted = sqlx::query(&self.db.rebind(
            "INSERT INTO system_options (name, value, created_at, updated_at) \
             VALUES ($1, $2, $3, $4)",
        ))
        .bind(name)
        .bind(&payload)
        .bind(&now)
        .bind(&now)
        .execute(self.db.pool())
        .await;

        match inserted {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(ref db_err)) if db_err.is_unique_violation() => {
                self.try_update(name, &payload, &now).await?;
                Ok(())
            }
            Err(e) => Err(AppError::with_source(
                ErrorKind::Database,
                "Failed to insert option",
                e,
            )),
        }
    }

    async fn try_update(&self, name: &str, payload: &str, now: &str) -> AppResult<bool> {
        let result = sqlx::query(&self.db.rebind(
            "UPDATE system_options SET value = $1, updated_at = $2 WHERE name = $3",
        ))
        .bind(payload)
        .bind(now)
        .bind(name)
        .execute(self.db.pool())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update option", e))?;
        Ok(result.rows_affected() > 0)
    }
}
