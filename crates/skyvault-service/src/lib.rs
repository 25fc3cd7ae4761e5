//! # skyvault-service
//!
//! Business logic service layer for SkyVault. Each service orchestrates
//! the settings store, the database handle, and repositories to
//! implement application-level use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod installer;
pub mod options;

pub use account::AccountService;
pub use installer::InstallerService;
pub use options::OptionService;
