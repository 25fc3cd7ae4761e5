//! User repository implementation.

use chrono::Utc;
use uuid::Uuid;

use skyvault_core::error::{AppError, ErrorKind};
use skyvault_core::result::AppResult;
use skyvault_entity::user::{CreateUser, User};

use crate::connection::DatabasePool;

/// Repository for user persistence.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabasePool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }

    /// Find a user by username (case-insensitive).
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            &self
                .db
                .rebind("SELECT * FROM users WHERE LOWER(username) = LOWER($1)"),
        )
        .bind(username)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
        })
    }

    /// Count all users.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(self.db.pool())
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))
    }

    /// Create a new user.
    ///
    /// The row is fully constructed app-side so the same INSERT works on
    /// every driver; a unique violation on username or email is reported
    /// as a conflict.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: data.username.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            role: data.role,
            ticket: data.ticket.clone(),
            status: data.status,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(&self.db.rebind(
            "INSERT INTO users (id, username, email, password_hash, role, ticket, status, \
             created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        ))
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(&user.ticket)
        .bind(user.status.as_str())
        .bind(user.created_at.to_rfc3339())
        .bind(user.updated_at.to_rfc3339())
        .execute(self.db.pool())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict(format!(
                    "Username '{}' or email '{}' already exists",
                    user.username, user.email
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::testing::test_db;
    use skyvault_core::error::ErrorKind;
    use skyvault_entity::user::{UserRole, UserStatus};

    fn admin_data() -> CreateUser {
        CreateUser {
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            role: UserRole::Admin,
            ticket: "a1b2c3".to_string(),
            status: UserStatus::Activated,
        }
    }

    #[tokio::test]
    async fn test_create_and_find_case_insensitive() {
        let (_dir, db) = test_db().await;
        let repo = UserRepository::new(db);

        let created = repo.create(&admin_data()).await.unwrap();
        assert_eq!(created.username, "admin");

        let found = repo.find_by_username("ADMIN").await.unwrap().expect("user");
        assert_eq!(found.id, created.id);
        assert_eq!(found.role, UserRole::Admin);
        assert_eq!(found.status, UserStatus::Activated);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_username_is_conflict() {
        let (_dir, db) = test_db().await;
        let repo = UserRepository::new(db);

        repo.create(&admin_data()).await.unwrap();
        let mut again = admin_data();
        again.email = "other@example.com".to_string();
        let err = repo.create(&again).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
