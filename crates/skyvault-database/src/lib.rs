//! # skyvault-database
//!
//! Database layer for SkyVault: a driver-agnostic pool over PostgreSQL,
//! MySQL, and SQLite, the installer's one-shot connection probe, the
//! portable schema migrations, and concrete repository implementations.

pub mod connection;
pub mod handle;
pub mod migration;
pub mod probe;
pub mod repositories;

pub use connection::DatabasePool;
pub use handle::DatabaseHandle;
pub use probe::probe_connection;
