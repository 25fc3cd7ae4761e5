//! Request DTOs with validation rules.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body for `PUT /system/database`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DatabaseSetupRequest {
    /// Database driver name: `postgres`, `mysql`, or `sqlite`.
    #[validate(length(min = 1, message = "Driver is required"))]
    pub driver: String,

    /// Driver-specific data source name.
    #[validate(length(min = 1, message = "DSN is required"))]
    pub dsn: String,
}

/// Body for `PUT /system/account`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AccountSetupRequest {
    /// Administrator email address.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    /// Administrator password.
    #[validate(length(min = 6, max = 64, message = "Password must be 6-64 characters"))]
    pub password: String,
}
