//! Schema migrations for the portable SQL schema.
//!
//! Every column is a plain text or integer type available on PostgreSQL,
//! MySQL, and SQLite alike. Identifiers, timestamps, and JSON payloads
//! are stored as text and decoded app-side, which keeps the DDL and all
//! queries identical across drivers.

use tracing::info;

use skyvault_core::error::{AppError, ErrorKind};
use skyvault_core::result::AppResult;

use crate::connection::DatabasePool;

const MIGRATIONS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id VARCHAR(36) PRIMARY KEY,
        username VARCHAR(64) NOT NULL,
        email VARCHAR(255) NOT NULL,
        password_hash VARCHAR(255) NOT NULL,
        role VARCHAR(16) NOT NULL,
        ticket VARCHAR(16) NOT NULL,
        status VARCHAR(16) NOT NULL,
        created_at VARCHAR(64) NOT NULL,
        updated_at VARCHAR(64) NOT NULL,
        CONSTRAINT users_username_key UNIQUE (username),
        CONSTRAINT users_email_key UNIQUE (email)
    )",
    "CREATE TABLE IF NOT EXISTS system_options (
        name VARCHAR(64) PRIMARY KEY,
        value TEXT NOT NULL,
        created_at VARCHAR(64) NOT NULL,
        updated_at VARCHAR(64) NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS storage_backends (
        id VARCHAR(36) PRIMARY KEY,
        mode VARCHAR(16) NOT NULL,
        name VARCHAR(64) NOT NULL,
        title VARCHAR(64) NOT NULL,
        internal_dirs VARCHAR(255) NOT NULL,
        bucket VARCHAR(64) NOT NULL,
        provider VARCHAR(16) NOT NULL,
        endpoint VARCHAR(128) NOT NULL,
        access_key VARCHAR(64) NOT NULL,
        secret_key VARCHAR(64) NOT NULL,
        custom_host VARCHAR(128) NOT NULL,
        root_path VARCHAR(64) NOT NULL,
        file_path VARCHAR(1024) NOT NULL,
        status VARCHAR(16) NOT NULL,
        created_at VARCHAR(64) NOT NULL,
        updated_at VARCHAR(64) NOT NULL,
        deleted_at VARCHAR(64),
        CONSTRAINT storage_backends_name_key UNIQUE (name)
    )",
];

/// Apply the schema, statement by statement.
///
/// Statements are `CREATE TABLE IF NOT EXISTS`, so re-running on an
/// already-migrated database is a no-op.
pub async fn run_migrations(db: &DatabasePool) -> AppResult<()> {
    for statement in MIGRATIONS {
        sqlx::query(statement).execute(db.pool()).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to run schema migration", e)
        })?;
    }
    info!(statements = MIGRATIONS.len(), "Schema migrations applied");
    Ok(())
}
