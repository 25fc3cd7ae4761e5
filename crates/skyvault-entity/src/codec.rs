//! Column decode helpers for driver-agnostic rows.
//!
//! The portable schema stores identifiers, timestamps, and JSON payloads
//! as text so the same queries run on PostgreSQL, MySQL, and SQLite.
//! These helpers turn the raw text back into typed values, reporting
//! failures as column decode errors.

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub(crate) fn decode_error(
    column: &str,
    source: impl std::error::Error + Send + Sync + 'static,
) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(source),
    }
}

pub(crate) fn decode_uuid(column: &str, raw: &str) -> Result<Uuid, sqlx::Error> {
    Uuid::parse_str(raw).map_err(|e| decode_error(column, e))
}

pub(crate) fn decode_utc(column: &str, raw: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| decode_error(column, e))
}

pub(crate) fn decode_json(column: &str, raw: &str) -> Result<serde_json::Value, sqlx::Error> {
    serde_json::from_str(raw).map_err(|e| decode_error(column, e))
}
