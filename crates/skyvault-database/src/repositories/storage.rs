//! Storage backend repository implementation.

use chrono::Utc;
use uuid::Uuid;

use skyvault_core::error::{AppError, ErrorKind};
use skyvault_core::result::AppResult;
use skyvault_entity::storage::{BackendStatus, CreateBackend, StorageBackend};

use crate::connection::DatabasePool;

/// Repository for storage backend registration and lookup.
#[derive(Debug, Clone)]
pub struct StorageBackendRepository {
    db: DatabasePool,
}

impl StorageBackendRepository {
    /// Create a new storage backend repository.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }

    /// Register a new backend.
    pub async fn create(&self, data: &CreateBackend) -> AppResult<StorageBackend> {
        let now = Utc::now();
        let backend = StorageBackend {
            id: Uuid::new_v4(),
            mode: data.mode,
            name: data.name.clone(),
            title: data.title.clone(),
            internal_dirs: data.internal_dirs.clone(),
            bucket: data.bucket.clone(),
            provider: data.provider,
            endpoint: data.endpoint.clone(),
            access_key: data.access_key.clone(),
            secret_key: data.secret_key.clone(),
            custom_host: data.custom_host.clone(),
            root_path: data.root_path.clone(),
            file_path: data.file_path.clone(),
            status: BackendStatus::Active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        sqlx::query(&self.db.rebind(
            "INSERT INTO storage_backends (id, mode, name, title, internal_dirs, bucket, \
             provider, endpoint, access_key, secret_key, custom_host, root_path, file_path, \
             status, created_at, updated_at, deleted_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)",
        ))
        .bind(backend.id.to_string())
        .bind(backend.mode.as_str())
        .bind(&backend.name)
        .bind(&backend.title)
        .bind(&backend.internal_dirs)
        .bind(&backend.bucket)
        .bind(backend.provider.as_str())
        .bind(&backend.endpoint)
        .bind(&backend.access_key)
        .bind(&backend.secret_key)
        .bind(&backend.custom_host)
        .bind(&backend.root_path)
        .bind(&backend.file_path)
        .bind(backend.status.as_str())
        .bind(backend.created_at.to_rfc3339())
        .bind(backend.updated_at.to_rfc3339())
        .bind(None::<String>)
        .execute(self.db.pool())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict(format!("Storage backend '{}' already exists", backend.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create storage backend", e),
        })?;

        Ok(backend)
    }

    /// Find a backend by primary key, soft-deleted rows included.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<StorageBackend>> {
        sqlx::query_as::<_, StorageBackend>(
            &self
                .db
                .rebind("SELECT * FROM storage_backends WHERE id = $1"),
        )
        .bind(id.to_string())
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find storage backend", e)
        })
    }

    /// List backends that have not been soft-deleted.
    pub async fn list_active(&self) -> AppResult<Vec<StorageBackend>> {
        sqlx::query_as::<_, StorageBackend>(&self.db.rebind(
            "SELECT * FROM storage_backends WHERE status = $1 ORDER BY created_at ASC",
        ))
        .bind(BackendStatus::Active.as_str())
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list storage backends", e)
        })
    }

    /// Soft-delete a backend, keeping the row in place.
    ///
    /// Repeated deletion keeps the first deletion timestamp. An unknown
    /// id is a not-found error.
    pub async fn soft_delete(&self, id: Uuid) -> AppResult<()> {
        let now = Utc::now().to_rfc3339();
        let result = sqlx::query(&self.db.rebind(
            "UPDATE storage_backends SET status = $1, deleted_at = $2, updated_at = $3 \
             WHERE id = $4 AND status = $5",
        ))
        .bind(BackendStatus::Deleted.as_str())
        .bind(&now)
        .bind(&now)
        .bind(id.to_string())
        .bind(BackendStatus::Active.as_str())
        .execute(self.db.pool())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete storage backend", e)
        })?;

        if result.rows_affected() == 0 {
            return match self.find_by_id(id).await? {
                Some(_) => Ok(()),
                None => Err(AppError::not_found(format!("Storage backend {id} not found"))),
            };
        }
        Ok(())
    }
}
