//! # skyvault-auth
//!
//! Authentication primitives for SkyVault.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and verification
//! - `ticket` — random activation ticket generation

pub mod password;
pub mod ticket;

pub use password::PasswordHasher;
pub use ticket::activation_ticket;
