//! Shared test helpers for integration tests.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use skyvault_api::AppState;
use skyvault_core::SettingsStore;
use skyvault_core::config::server::CorsConfig;
use skyvault_database::DatabaseHandle;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Settings store backing the router
    pub settings: Arc<SettingsStore>,
    /// Database handle backing the router
    pub db: Arc<DatabaseHandle>,
    /// Temp directory holding the settings file and SQLite database
    pub dir: TempDir,
}

impl TestApp {
    /// Create a fresh, uninstalled test application
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let settings_path = dir.path().join("skyvault.toml");
        let settings =
            Arc::new(SettingsStore::load(&settings_path).expect("Failed to load settings"));
        let db = Arc::new(DatabaseHandle::empty());

        let state = AppState::new(Arc::clone(&settings), Arc::clone(&db));
        let router = skyvault_api::build_router(state, &CorsConfig::default());

        Self {
            router,
            settings,
            db,
            dir,
        }
    }

    /// Create a test application with the database step already done
    pub async fn installed() -> Self {
        let app = Self::new().await;

        let response = app
            .request(
                "PUT",
                "/system/database",
                Some(serde_json::json!({
                    "driver": "sqlite",
                    "dsn": app.sqlite_dsn(),
                })),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Database setup failed: {:?}",
            response.body
        );

        app
    }

    /// DSN of a SQLite database inside the temp directory
    pub fn sqlite_dsn(&self) -> String {
        self.dir.path().join("skyvault.db").display().to_string()
    }

    /// Path where the settings file is persisted
    pub fn settings_path(&self) -> PathBuf {
        self.dir.path().join("skyvault.toml")
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.request_raw(method, path, body_str).await
    }

    /// Make an HTTP request with a raw string body
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: impl Into<String>,
    ) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.into()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
