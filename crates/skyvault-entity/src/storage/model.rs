//! Storage backend entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use uuid::Uuid;

use super::mode::StorageMode;
use super::provider::ProviderKind;
use crate::codec;

/// Lifecycle status of a storage backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendStatus {
    /// Backend is active and accepts traffic.
    Active,
    /// Backend has been soft-deleted and is hidden from listings.
    Deleted,
}

impl BackendStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for BackendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BackendStatus {
    type Err = skyvault_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "deleted" => Ok(Self::Deleted),
            _ => Err(skyvault_core::AppError::validation(format!(
                "Invalid backend status: '{s}'. Expected one of: active, deleted"
            ))),
        }
    }
}

/// A configured storage backend.
///
/// Deletion is soft: the record stays in place with
/// [`BackendStatus::Deleted`] and a deletion timestamp, so historical
/// file rows keep a resolvable backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageBackend {
    /// Unique backend identifier.
    pub id: Uuid,
    /// Addressing mode for stored objects.
    pub mode: StorageMode,
    /// Short machine name.
    pub name: String,
    /// Human-readable title shown in the UI.
    pub title: String,
    /// Comma-separated directories provisioned inside the bucket.
    pub internal_dirs: String,
    /// Bucket or container name at the provider.
    pub bucket: String,
    /// Object-storage provider.
    pub provider: ProviderKind,
    /// Provider API endpoint.
    pub endpoint: String,
    /// Provider access key.
    pub access_key: String,
    /// Provider secret key.
    #[serde(skip_serializing)]
    pub secret_key: String,
    /// Custom download host fronting the bucket, if any.
    pub custom_host: String,
    /// Path prefix under which all objects live.
    pub root_path: String,
    /// Object naming template for uploads.
    pub file_path: String,
    /// Current lifecycle status.
    pub status: BackendStatus,
    /// When the backend was created.
    pub created_at: DateTime<Utc>,
    /// When the backend was last updated.
    pub updated_at: DateTime<Utc>,
    /// When the backend was soft-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl StorageBackend {
    /// Whether objects on this backend are world-readable.
    ///
    /// Only [`StorageMode::FileDisk`] backends serve public objects; the
    /// decision depends on the mode alone, never on provider or status.
    pub fn public_read(&self) -> bool {
        self.mode == StorageMode::FileDisk
    }

    /// Whether the backend has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.status == BackendStatus::Deleted
    }

    /// Soft-delete the backend, recording the deletion time.
    ///
    /// Idempotent: a second call keeps the original deletion timestamp.
    pub fn soft_delete(&mut self) {
        if self.is_deleted() {
            return;
        }
        self.status = BackendStatus::Deleted;
        self.deleted_at = Some(Utc::now());
    }
}

impl FromRow<'_, AnyRow> for StorageBackend {
    fn from_row(row: &AnyRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let mode: String = row.try_get("mode")?;
        let provider: String = row.try_get("provider")?;
        let status: String = row.try_get("status")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;
        let deleted_at: Option<String> = row.try_get("deleted_at")?;
        Ok(Self {
            id: codec::decode_uuid("id", &id)?,
            mode: mode.parse().map_err(|e| codec::decode_error("mode", e))?,
            name: row.try_get("name")?,
            title: row.try_get("title")?,
            internal_dirs: row.try_get("internal_dirs")?,
            bucket: row.try_get("bucket")?,
            provider: provider
                .parse()
                .map_err(|e| codec::decode_error("provider", e))?,
            endpoint: row.try_get("endpoint")?,
            access_key: row.try_get("access_key")?,
            secret_key: row.try_get("secret_key")?,
            custom_host: row.try_get("custom_host")?,
            root_path: row.try_get("root_path")?,
            file_path: row.try_get("file_path")?,
            status: status
                .parse()
                .map_err(|e| codec::decode_error("status", e))?,
            created_at: codec::decode_utc("created_at", &created_at)?,
            updated_at: codec::decode_utc("updated_at", &updated_at)?,
            deleted_at: match deleted_at {
                Some(raw) => Some(codec::decode_utc("deleted_at", &raw)?),
                None => None,
            },
        })
    }
}

/// Data required to register a new storage backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBackend {
    /// Addressing mode.
    pub mode: StorageMode,
    /// Short machine name.
    pub name: String,
    /// Human-readable title.
    pub title: String,
    /// Comma-separated directories to provision.
    pub internal_dirs: String,
    /// Bucket or container name.
    pub bucket: String,
    /// Object-storage provider.
    pub provider: ProviderKind,
    /// Provider API endpoint.
    pub endpoint: String,
    /// Provider access key.
    pub access_key: String,
    /// Provider secret key.
    pub secret_key: String,
    /// Custom download host, if any.
    pub custom_host: String,
    /// Path prefix under which all objects live.
    pub root_path: String,
    /// Object naming template for uploads.
    pub file_path: String,
}
