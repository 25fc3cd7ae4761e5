//! Hot-swappable handle to the active database pool.
//!
//! Before installation there is no database to talk to, so the server
//! starts with an empty handle. The installer attaches a live pool once
//! setup succeeds, which unlocks the data-backed endpoints without a
//! restart.

use tokio::sync::RwLock;

use skyvault_core::error::AppError;
use skyvault_core::result::AppResult;

use crate::connection::DatabasePool;

/// Shared slot holding the active [`DatabasePool`], if any.
#[derive(Debug)]
pub struct DatabaseHandle {
    inner: RwLock<Option<DatabasePool>>,
}

impl DatabaseHandle {
    /// A handle with no pool attached.
    pub fn empty() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// A handle wrapping an already-connected pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            inner: RwLock::new(Some(pool)),
        }
    }

    /// The active pool, if the database has been configured.
    pub async fn get(&self) -> Option<DatabasePool> {
        self.inner.read().await.clone()
    }

    /// The active pool, or a service-unavailable error when the system
    /// has not been installed yet.
    pub async fn require(&self) -> AppResult<DatabasePool> {
        self.get()
            .await
            .ok_or_else(|| AppError::service_unavailable("Database is not configured yet"))
    }

    /// Whether a pool is currently attached.
    pub async fn is_attached(&self) -> bool {
        self.inner.read().await.is_some()
    }

    /// Attach `pool`, returning the previously active pool if any.
    pub async fn replace(&self, pool: DatabasePool) -> Option<DatabasePool> {
        self.inner.write().await.replace(pool)
    }
}

impl Default for DatabaseHandle {
    fn default() -> Self {
        Self::empty()
    }
}
