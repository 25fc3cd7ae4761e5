//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /health
///
/// Always available, installed or not, so probes and load balancers can
/// watch the server through setup.
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let database = match state.db.get().await {
        Some(pool) => match pool.health_check().await {
            Ok(true) => "connected",
            _ => "error",
        },
        None => "unconfigured",
    };

    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        install_state: state.settings.install_state().await.to_string(),
        database: database.to_string(),
    }))
}
