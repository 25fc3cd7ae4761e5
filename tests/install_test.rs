//! Integration tests for the installation flow.

mod helpers;

use axum::http::StatusCode;

use skyvault_core::config::database::DatabaseDriver;
use skyvault_core::config::install::InstallState;

#[tokio::test]
async fn test_gated_routes_locked_before_install() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/system/providers", None).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "SERVICE_UNAVAILABLE"
    );

    let response = app.request("GET", "/system/options/site", None).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);

    let response = app
        .request(
            "PUT",
            "/system/options/site",
            Some(serde_json::json!({"title": "SkyVault"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_health_reachable_before_install() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.body.get("data").unwrap();
    assert_eq!(data.get("install_state").unwrap().as_str().unwrap(), "pending");
    assert_eq!(data.get("database").unwrap().as_str().unwrap(), "unconfigured");
}

#[tokio::test]
async fn test_database_setup_persists_and_unlocks() {
    let app = helpers::TestApp::new().await;
    let dsn = app.sqlite_dsn();

    let response = app
        .request(
            "PUT",
            "/system/database",
            Some(serde_json::json!({
                "driver": "sqlite",
                "dsn": dsn,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert!(response.body.get("success").unwrap().as_bool().unwrap());
    assert!(response.body.get("data").unwrap().is_null());

    // The configuration reads back exactly as submitted.
    let stored = app.settings.database().await.expect("No database config stored");
    assert_eq!(stored.driver, DatabaseDriver::Sqlite);
    assert_eq!(stored.dsn, dsn);

    assert_eq!(app.settings.install_state().await, InstallState::Installed);
    assert!(app.settings_path().is_file());
    assert!(app.db.is_attached().await);

    // The gate is now fully open.
    let response = app.request("GET", "/system/providers", None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_failed_probe_leaves_no_trace() {
    let app = helpers::TestApp::new().await;

    // SQLite will not create parent directories, so this DSN cannot
    // be opened.
    let dsn = format!("{}/missing/skyvault.db", app.dir.path().display());

    let response = app
        .request(
            "PUT",
            "/system/database",
            Some(serde_json::json!({
                "driver": "sqlite",
                "dsn": dsn,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "INTERNAL_ERROR"
    );

    // Nothing was persisted and nothing came online.
    assert_eq!(app.settings.install_state().await, InstallState::Pending);
    assert!(app.settings.database().await.is_none());
    assert!(!app.settings_path().exists());
    assert!(!app.db.is_attached().await);

    // The gate stays locked.
    let response = app.request("GET", "/system/providers", None).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_second_install_is_rejected() {
    let app = helpers::TestApp::installed().await;
    let first_dsn = app.sqlite_dsn();

    let other_dsn = format!("{}/other.db", app.dir.path().display());
    let response = app
        .request(
            "PUT",
            "/system/database",
            Some(serde_json::json!({
                "driver": "sqlite",
                "dsn": other_dsn,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body.get("error").unwrap().as_str().unwrap(), "CONFLICT");

    // The first configuration is untouched.
    let stored = app.settings.database().await.expect("No database config stored");
    assert_eq!(stored.dsn, first_dsn);
}

#[tokio::test]
async fn test_unknown_driver_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/system/database",
            Some(serde_json::json!({
                "driver": "oracle",
                "dsn": "whatever",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "VALIDATION_ERROR"
    );
    assert_eq!(app.settings.install_state().await, InstallState::Pending);
}

#[tokio::test]
async fn test_missing_dsn_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/system/database",
            Some(serde_json::json!({"driver": "sqlite"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.settings.install_state().await, InstallState::Pending);
}

#[tokio::test]
async fn test_provider_catalog_after_install() {
    let app = helpers::TestApp::installed().await;

    let response = app.request("GET", "/system/providers", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let providers = response.body.get("data").unwrap().as_array().unwrap();
    assert_eq!(providers.len(), 6);

    let names: Vec<&str> = providers.iter().filter_map(|p| p.as_str()).collect();
    assert!(names.contains(&"s3"));
    assert!(names.contains(&"minio"));
}
