//! # skyvault-core
//!
//! Core crate for SkyVault. Contains the configuration schemas, the
//! persistent settings store, and the unified error system.
//!
//! This crate has **no** internal dependencies on other SkyVault crates.

pub mod config;
pub mod error;
pub mod result;

pub use config::AppConfig;
pub use config::store::SettingsStore;
pub use error::{AppError, ErrorKind};
pub use result::AppResult;
