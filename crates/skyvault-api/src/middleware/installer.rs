//! Installation gate.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use skyvault_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Rejects requests until the system has been installed.
///
/// Mounted as a route layer on everything except the setup endpoints,
/// so gated handlers never run against an unconfigured system. The
/// check happens before the handler and carries no partial state: a
/// request observes the gate either fully locked or fully open.
pub async fn require_installed(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !state.settings.install_state().await.is_installed() {
        let err = AppError::service_unavailable(
            "System is not installed yet. Complete setup via PUT /system/database",
        );
        return ApiError::from(err).into_response();
    }

    next.run(request).await
}
