//! Integration tests for administrator account bootstrap.

mod helpers;

use axum::http::StatusCode;

use skyvault_auth::PasswordHasher;
use skyvault_database::repositories::UserRepository;

#[tokio::test]
async fn test_admin_account_created_with_fixed_identity() {
    let app = helpers::TestApp::installed().await;

    let response = app
        .request(
            "PUT",
            "/system/account",
            Some(serde_json::json!({
                "email": "admin@example.com",
                "password": "s3cret-pass",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    // Write endpoints confirm with an empty envelope.
    assert!(response.body.get("data").unwrap().is_null());

    let pool = app.db.require().await.expect("Database not attached");
    let repo = UserRepository::new(pool);
    let user = repo
        .find_by_username("admin")
        .await
        .expect("Lookup failed")
        .expect("Admin record missing");

    assert_eq!(user.username, "admin");
    assert_eq!(user.email, "admin@example.com");
    assert_eq!(user.role.to_string(), "admin");
    assert_eq!(user.status.to_string(), "activated");
    assert!(user.is_admin());
    assert!(user.can_login());
    assert_eq!(user.ticket.len(), 6);
    assert!(user.ticket.chars().all(|c| c.is_ascii_alphanumeric()));

    // Stored as an Argon2 hash, never the raw password.
    assert_ne!(user.password_hash, "s3cret-pass");
    assert!(user.password_hash.starts_with("$argon2id$"));
    let hasher = PasswordHasher::new();
    assert!(
        hasher
            .verify_password("s3cret-pass", &user.password_hash)
            .expect("Verify failed")
    );
}

#[tokio::test]
async fn test_duplicate_admin_is_rejected() {
    let app = helpers::TestApp::installed().await;

    let response = app
        .request(
            "PUT",
            "/system/account",
            Some(serde_json::json!({
                "email": "admin@example.com",
                "password": "s3cret-pass",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "PUT",
            "/system/account",
            Some(serde_json::json!({
                "email": "other@example.com",
                "password": "different-pass",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let pool = app.db.require().await.expect("Database not attached");
    let repo = UserRepository::new(pool);
    assert_eq!(repo.count().await.expect("Count failed"), 1);
}

#[tokio::test]
async fn test_account_setup_requires_database() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/system/account",
            Some(serde_json::json!({
                "email": "admin@example.com",
                "password": "s3cret-pass",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let app = helpers::TestApp::installed().await;

    let response = app
        .request(
            "PUT",
            "/system/account",
            Some(serde_json::json!({
                "email": "not-an-email",
                "password": "s3cret-pass",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "VALIDATION_ERROR"
    );
}

#[tokio::test]
async fn test_short_password_is_rejected() {
    let app = helpers::TestApp::installed().await;

    let response = app
        .request(
            "PUT",
            "/system/account",
            Some(serde_json::json!({
                "email": "admin@example.com",
                "password": "abc",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let pool = app.db.require().await.expect("Database not attached");
    let repo = UserRepository::new(pool);
    assert!(
        repo.find_by_username("admin")
            .await
            .expect("Lookup failed")
            .is_none()
    );
}
