mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use classfolio::services::AuthService;
use common::{Factory, TestApp};

#[tokio::test]
async fn test_login_success_sets_session_cookie() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.store);
    factory.create_admin("admin@example.com", "correct horse battery");

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "admin@example.com", "password": "correct horse battery" }))
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert!(body["success"].as_bool().unwrap());

    // The saved cookie now authenticates the session check
    let response = app.server.get("/api/me").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert!(body["isAdmin"].as_bool().unwrap());
    assert_eq!(body["email"].as_str().unwrap(), "admin@example.com");
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.store);
    factory.create_admin("admin@example.com", "correct horse battery");

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "admin@example.com", "password": "wrong" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_email_is_the_same_401() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": "whatever" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    // Undifferentiated from the wrong-password outcome
    let body: Value = response.json();
    assert_eq!(body["error"].as_str().unwrap(), "Invalid credentials");
}

#[tokio::test]
async fn test_me_without_cookie_is_anonymous() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/me").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert!(!body["isAdmin"].as_bool().unwrap());
    assert!(body.get("email").is_none());
}

#[tokio::test]
async fn test_me_with_garbage_token_is_anonymous_not_an_error() {
    let app = TestApp::new().await;

    let response = app
        .server
        .get("/api/me")
        .add_header("Cookie", "admin_token=not-a-jwt")
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert!(!body["isAdmin"].as_bool().unwrap());
}

#[tokio::test]
async fn test_me_with_expired_token_is_anonymous() {
    let app = TestApp::new().await;

    let mut expired_config = app.state.config.clone();
    expired_config.jwt_expiration_hours = -1;
    let token =
        AuthService::generate_token("rec000001", "admin@example.com", &expired_config).unwrap();

    let response = app
        .server
        .get("/api/me")
        .add_header("Cookie", format!("admin_token={}", token))
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert!(!body["isAdmin"].as_bool().unwrap());
}

#[tokio::test]
async fn test_logout_clears_the_session() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.store);
    factory.create_admin("admin@example.com", "correct horse battery");

    app.server
        .post("/api/auth/login")
        .json(&json!({ "email": "admin@example.com", "password": "correct horse battery" }))
        .await
        .assert_status(StatusCode::OK);

    app.server
        .post("/api/auth/logout")
        .await
        .assert_status(StatusCode::OK);

    let response = app.server.get("/api/me").await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert!(!body["isAdmin"].as_bool().unwrap());
}

#[tokio::test]
async fn test_admin_page_redirects_without_session() {
    let app = TestApp::new().await;

    let response = app.server.get("/admin").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location").to_str().unwrap(), "/login");
}

#[tokio::test]
async fn test_admin_page_redirects_with_expired_session() {
    let app = TestApp::new().await;

    let mut expired_config = app.state.config.clone();
    expired_config.jwt_expiration_hours = -1;
    let token =
        AuthService::generate_token("rec000001", "admin@example.com", &expired_config).unwrap();

    let response = app
        .server
        .get("/admin")
        .add_header("Cookie", format!("admin_token={}", token))
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location").to_str().unwrap(), "/login");
}

#[tokio::test]
async fn test_admin_page_renders_with_valid_session() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.store);
    factory.create_admin("admin@example.com", "correct horse battery");

    app.server
        .post("/api/auth/login")
        .json(&json!({ "email": "admin@example.com", "password": "correct horse battery" }))
        .await
        .assert_status(StatusCode::OK);

    let response = app.server.get("/admin").await;
    response.assert_status(StatusCode::OK);
    assert!(response.text().contains("admin@example.com"));
}
