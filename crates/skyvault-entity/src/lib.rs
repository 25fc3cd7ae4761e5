//! # skyvault-entity
//!
//! Domain entity models for SkyVault. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, and `Deserialize`; database
//! entities additionally implement `FromRow` over driver-agnostic rows,
//! decoding the portable text columns by hand.

mod codec;

pub mod option;
pub mod storage;
pub mod user;
