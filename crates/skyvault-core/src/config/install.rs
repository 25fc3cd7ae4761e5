//! Installation state tracked in the settings file.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of the one-time installation flow.
///
/// The state is persisted in the settings file and transitions from
/// [`Pending`](Self::Pending) to [`Installed`](Self::Installed) exactly
/// once, when the database setup succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallState {
    /// The system has not been installed yet.
    Pending,
    /// Database setup completed; the full API is available.
    Installed,
}

impl InstallState {
    /// String form used in the settings file and health payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Installed => "installed",
        }
    }

    /// Whether installation has completed.
    pub fn is_installed(&self) -> bool {
        matches!(self, Self::Installed)
    }
}

impl Default for InstallState {
    fn default() -> Self {
        Self::Pending
    }
}

impl fmt::Display for InstallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Installation section of the settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Current install state.
    #[serde(default)]
    pub state: InstallState,
}
