//! Administrator account bootstrap.

use std::sync::Arc;

use tracing::info;

use skyvault_auth::{PasswordHasher, activation_ticket};
use skyvault_core::result::AppResult;
use skyvault_database::DatabaseHandle;
use skyvault_database::repositories::UserRepository;
use skyvault_entity::user::{CreateUser, User, UserRole, UserStatus};

/// Fixed login name for the bootstrap administrator.
const ADMIN_USERNAME: &str = "admin";

/// Creates the initial administrator account.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// Slot for the live database pool.
    db: Arc<DatabaseHandle>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(db: Arc<DatabaseHandle>, hasher: Arc<PasswordHasher>) -> Self {
        Self { db, hasher }
    }

    /// Create the administrator account.
    ///
    /// The username and role are fixed; callers supply only the email
    /// and password. The account is created already activated, with a
    /// fresh activation ticket on record. Attempting to create a second
    /// administrator fails with a conflict from the username constraint.
    pub async fn create_admin(&self, email: &str, password: &str) -> AppResult<User> {
        let repo = UserRepository::new(self.db.require().await?);

        let password_hash = self.hasher.hash_password(password)?;
        let data = CreateUser {
            username: ADMIN_USERNAME.to_string(),
            email: email.to_string(),
            password_hash,
            role: UserRole::Admin,
            ticket: activation_ticket(),
            status: UserStatus::Activated,
        };

        let user = repo.create(&data).await?;
        info!(user_id = %user.id, "Administrator account created");
        Ok(user)
    }
}
