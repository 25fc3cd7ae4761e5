//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Standard success envelope for all API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response payload.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl ApiResponse<()> {
    /// Creates a successful response with a `null` payload. Write
    /// endpoints confirm with the status alone.
    pub fn empty() -> Self {
        Self {
            success: true,
            data: (),
        }
    }
}

/// Body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,
    /// Server version
    pub version: String,
    /// Current install state
    pub install_state: String,
    /// Database connectivity: `connected`, `error`, or `unconfigured`
    pub database: String,
}
