//! Route table for the SkyVault HTTP API.
//!
//! The setup endpoints stay reachable at all times so a fresh
//! deployment can be configured. Everything else sits behind the
//! installation gate.

use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, put};
use tower_http::trace::TraceLayer;

use skyvault_core::config::server::CorsConfig;

use crate::handlers::{health, system};
use crate::middleware::{build_cors_layer, request_logging, require_installed};
use crate::state::AppState;

/// Builds the complete router with all routes and middleware.
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    // Reachable before installation.
    let setup_routes = Router::new()
        .route("/system/database", put(system::setup_database))
        .route("/system/account", put(system::setup_account));

    // Locked until the system is installed.
    let gated_routes = Router::new()
        .route("/system/providers", get(system::list_providers))
        .route(
            "/system/options/{name}",
            get(system::get_option).put(system::set_option),
        )
        .route_layer(from_fn_with_state(state.clone(), require_installed));

    Router::new()
        .route("/health", get(health::health))
        .merge(setup_routes)
        .merge(gated_routes)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors))
        .layer(from_fn(request_logging))
        .with_state(state)
}
