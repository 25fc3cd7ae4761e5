//! # SkyVault API
//!
//! HTTP layer for SkyVault: route table, handlers, DTOs, extractors,
//! and middleware. Consumers build an [`AppState`] from the settings
//! store and database handle, then mount the router returned by
//! [`build_router`].

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
