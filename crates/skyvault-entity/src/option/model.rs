//! System option entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};

use crate::codec;

/// A named, JSON-valued system option.
///
/// Options are free-form JSON objects keyed by a unique name, e.g.
/// `core` for site-wide settings or `email` for the mail sender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemOption {
    /// Unique option name.
    pub name: String,
    /// JSON object payload.
    pub value: serde_json::Value,
    /// When the option was first set.
    pub created_at: DateTime<Utc>,
    /// When the option was last updated.
    pub updated_at: DateTime<Utc>,
}

impl FromRow<'_, AnyRow> for SystemOption {
    fn from_row(row: &AnyRow) -> Result<Self, sqlx::Error> {
        let value: String = row.try_get("value")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;
        Ok(Self {
            name: row.try_get("name")?,
            value: codec::decode_json("value", &value)?,
            created_at: codec::decode_utc("created_at", &created_at)?,
            updated_at: codec::decode_utc("updated_at", &updated_at)?,
        })
    }
}
