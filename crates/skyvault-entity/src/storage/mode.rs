//! Storage backend mode enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How files stored on a backend are addressed and protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// Private per-user space; objects require signed access.
    NetDisk,
    /// Shared public space; objects are world-readable.
    FileDisk,
}

impl StorageMode {
    /// Return the mode as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NetDisk => "netdisk",
            Self::FileDisk => "filedisk",
        }
    }
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StorageMode {
    type Err = skyvault_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "netdisk" => Ok(Self::NetDisk),
            "filedisk" => Ok(Self::FileDisk),
            _ => Err(skyvault_core::AppError::validation(format!(
                "Invalid storage mode: '{s}'. Expected one of: netdisk, filedisk"
            ))),
        }
    }
}
