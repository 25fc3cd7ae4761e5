//! Middleware stack: CORS, request logging, and the installation gate.

pub mod cors;
pub mod installer;
pub mod logging;

pub use cors::build_cors_layer;
pub use installer::require_installed;
pub use logging::request_logging;
