//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use skyvault_auth::PasswordHasher;
use skyvault_core::SettingsStore;
use skyvault_database::DatabaseHandle;
use skyvault_service::{AccountService, InstallerService, OptionService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Persistent settings store
    pub settings: Arc<SettingsStore>,

    // ── Infrastructure ───────────────────────────────────────
    /// Slot for the database pool, attachable after startup
    pub db: Arc<DatabaseHandle>,
    /// Argon2 password hasher
    pub password_hasher: Arc<PasswordHasher>,

    // ── Services ─────────────────────────────────────────────
    /// Installation orchestration
    pub installer: Arc<InstallerService>,
    /// Administrator account bootstrap
    pub accounts: Arc<AccountService>,
    /// System option reads and writes
    pub options: Arc<OptionService>,
}

impl AppState {
    /// Wires the full dependency graph from its two roots.
    pub fn new(settings: Arc<SettingsStore>, db: Arc<DatabaseHandle>) -> Self {
        let password_hasher = Arc::new(PasswordHasher::new());

        let installer = Arc::new(InstallerService::new(
            Arc::clone(&settings),
            Arc::clone(&db),
        ));
        let accounts = Arc::new(AccountService::new(
            Arc::clone(&db),
            Arc::clone(&password_hasher),
        ));
        let options = Arc::new(OptionService::new(Arc::clone(&db)));

        Self {
            settings,
            db,
            password_hasher,
            installer,
            accounts,
            options,
        }
    }
}
