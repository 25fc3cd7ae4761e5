//! System setup and configuration handlers.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use skyvault_core::config::database::{DatabaseConfig, DatabaseDriver};
use skyvault_core::error::AppError;
use skyvault_entity::storage::ProviderKind;

use crate::dto::request::{AccountSetupRequest, DatabaseSetupRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// PUT /system/database
///
/// Probes the candidate configuration with a live connection, persists
/// it on success, and brings the pool online. Stays reachable while the
/// system is uninstalled; repeating it after installation is a conflict.
pub async fn setup_database(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<DatabaseSetupRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let driver = DatabaseDriver::from_str(&req.driver)?;
    let config = DatabaseConfig::new(driver, req.dsn);
    state.installer.setup_database(config).await?;

    Ok(Json(ApiResponse::empty()))
}

/// PUT /system/account
///
/// Creates the administrator account. Requires the database to be
/// online, so it only succeeds after `PUT /system/database`.
pub async fn setup_account(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AccountSetupRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .accounts
        .create_admin(&req.email, &req.password)
        .await?;

    Ok(Json(ApiResponse::empty()))
}

/// GET /system/providers
///
/// Lists the storage providers this build knows how to talk to.
pub async fn list_providers() -> Json<ApiResponse<Vec<ProviderKind>>> {
    Json(ApiResponse::ok(ProviderKind::all().to_vec()))
}

/// GET /system/options/{name}
pub async fn get_option(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let option = state.options.get(&name).await?;
    Ok(Json(ApiResponse::ok(option.value)))
}

/// PUT /system/options/{name}
pub async fn set_option(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ApiJson(value): ApiJson<serde_json::Value>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.options.set(&name, &value).await?;
    Ok(Json(ApiResponse::empty()))
}
