//! Account API Tests

use axum::http::{header, HeaderValue, StatusCode};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::Value;

use small_chat::application::services::TokenService;
use small_chat::domain::AccountId;

use crate::common::{credentials, TestApp, TEST_USER};

// ==========================================================================
// POST /accounts
// ==========================================================================

#[tokio::test]
async fn test_create_account_returns_username_and_token() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/accounts")
        .json(&credentials(TEST_USER.username, TEST_USER.password))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["username"], TEST_USER.username);
    let token = body["token"].as_str().expect("token");
    assert!(!token.is_empty());
    assert!(app.tokens.verify(token).is_ok());
    assert!(body.get("account_id").is_none());
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_create_account_with_invalid_username_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/accounts")
        .json(&credentials("bad user", TEST_USER.password))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_create_account_with_overlong_password_is_bad_request() {
    let app = TestApp::new();
    let password = "a".repeat(73);

    let response = app
        .server
        .post("/accounts")
        .json(&credentials(TEST_USER.username, &password))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_create_account_with_malformed_json_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/accounts")
        .json(&serde_json::json!({ "username": "testuser" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_username_is_conflict_and_keeps_first_password() {
    let app = TestApp::new();
    app.register(TEST_USER.username, TEST_USER.password).await;

    let response = app
        .server
        .post("/accounts")
        .json(&credentials(TEST_USER.username, "otherpass99"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    app.server
        .post("/login")
        .json(&credentials(TEST_USER.username, TEST_USER.password))
        .await
        .assert_status(StatusCode::OK);
    app.server
        .post("/login")
        .json(&credentials(TEST_USER.username, "otherpass99"))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

// ==========================================================================
// POST /login
// ==========================================================================

#[tokio::test]
async fn test_login_after_create_returns_new_valid_token() {
    let app = TestApp::new();
    let first = app.register(TEST_USER.username, TEST_USER.password).await;

    let response = app
        .server
        .post("/login")
        .json(&credentials(TEST_USER.username, TEST_USER.password))
        .await;

    response.assert_status(StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["username"], TEST_USER.username);
    let second = body["token"].as_str().expect("token");
    assert_ne!(second, first.as_str());
    assert_eq!(
        app.tokens.verify(second).unwrap(),
        app.tokens.verify(&first).unwrap()
    );
}

#[tokio::test]
async fn test_login_failures_look_identical() {
    let app = TestApp::new();
    app.register(TEST_USER.username, TEST_USER.password).await;

    let wrong_password = app
        .server
        .post("/login")
        .json(&credentials(TEST_USER.username, "wrongpass1"))
        .await;
    let unknown_user = app
        .server
        .post("/login")
        .json(&credentials("doesnotexist", TEST_USER.password))
        .await;

    wrong_password.assert_status(StatusCode::UNAUTHORIZED);
    unknown_user.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        wrong_password.json::<Value>(),
        unknown_user.json::<Value>()
    );
}

#[tokio::test]
async fn test_login_with_invalid_password_format_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/login")
        .json(&credentials(TEST_USER.username, "short"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

// ==========================================================================
// GET /accounts/me
// ==========================================================================

#[tokio::test]
async fn test_me_returns_account_from_token() {
    let app = TestApp::new();
    let token = app.register(TEST_USER.username, TEST_USER.password).await;
    let expected = app.tokens.verify(&token).unwrap();

    let response = app
        .server
        .get("/accounts/me")
        .authorization_bearer(&token)
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.json::<Value>()["account_id"],
        expected.to_string()
    );
}

#[tokio::test]
async fn test_me_without_token_is_unauthorized() {
    let app = TestApp::new();

    app.server
        .get("/accounts/me")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_non_bearer_scheme_is_unauthorized() {
    let app = TestApp::new();

    app.server
        .get("/accounts/me")
        .add_header(header::AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_token_from_other_key_is_unauthorized() {
    let app = TestApp::new();
    let other = TokenService::new(b"another-secret-key-of-32-bytes!!!", Duration::hours(1)).unwrap();
    let token = other.issue(&AccountId::new_v4()).unwrap();

    app.server
        .get("/accounts/me")
        .authorization_bearer(token.as_str())
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_expired_token_is_unauthorized() {
    let app = TestApp::new();
    let token = app
        .tokens
        .issue_at(&AccountId::new_v4(), Utc::now() - Duration::hours(2))
        .unwrap();

    let response = app
        .server
        .get("/accounts/me")
        .authorization_bearer(token.as_str())
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["message"], "Token expired");
}
