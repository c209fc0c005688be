//! Authentication API integration tests
//!
//! Tests for the authentication endpoints: register, login, logout,
//! logout-all and user info.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{create_test_user, send, send_raw, test_app, test_service, TestDatabase};

fn registration(email: &str) -> serde_json::Value {
    json!({
        "name": "Test User",
        "email": email,
        "password": "password123",
        "confirm_password": "password123"
    })
}

#[tokio::test]
async fn test_register_success() {
    let db = TestDatabase::new().await;
    let app = test_app(&db);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        Some(registration("Test@Example.com")),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["email"], "test@example.com");
    assert_eq!(body["user"]["name"], "Test User");
    assert!(body["user"].get("password_hash").is_none());
    assert_eq!(db.session_count().await, 1);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let db = TestDatabase::new().await;
    let app = test_app(&db);
    create_test_user(&test_service(&db), "test@example.com", "password123").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        Some(registration("test@example.com")),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], 409);
}

#[tokio::test]
async fn test_register_validation() {
    let db = TestDatabase::new().await;
    let app = test_app(&db);

    let cases = [
        (json!({"name": "J", "email": "test@example.com", "password": "password123"}), "name"),
        (json!({"name": "Test User", "email": "invalid-email", "password": "password123"}), "email"),
        (json!({"name": "Test User", "email": "test@example.com", "password": "short"}), "password"),
        (
            json!({
                "name": "Test User",
                "email": "test@example.com",
                "password": "password123",
                "confirm_password": "different123"
            }),
            "confirm_password",
        ),
    ];

    for (request, field) in cases {
        let (status, body) = send(&app, Method::POST, "/api/auth/register", Some(request), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "field {field}");
        assert_eq!(body["field"], field);
    }

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        Some(json!({
            "name": "Test User",
            "email": "test@example.com",
            "password": "password123",
            "confirm_password": "different123"
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_contains!(body["error"].as_str().unwrap_or_default(), "Passwords do not match");
    assert_eq!(db.session_count().await, 0);
}

#[tokio::test]
async fn test_malformed_bodies_get_json_errors() {
    let db = TestDatabase::new().await;
    let app = test_app(&db);

    let cases = [
        ("/api/auth/register", r#"{"email":"a@b.com","password":"password123"}"#, "name"),
        ("/api/auth/register", "not json", "expected"),
        ("/api/auth/login", r#"{"email":"a@b.com"}"#, "password"),
        ("/api/auth/login", "", "EOF"),
    ];

    for (uri, body, mentions) in cases {
        let (status, json) = send_raw(&app, Method::POST, uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri} {body}");
        assert_eq!(json["status"], 400, "{uri} {body}");
        assert_contains!(json["error"].as_str().unwrap_or_default(), mentions);
    }
    assert_eq!(db.session_count().await, 0);
}

#[tokio::test]
async fn test_login_success() {
    let db = TestDatabase::new().await;
    let app = test_app(&db);
    let user = create_test_user(&test_service(&db), "test@example.com", "password123").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        Some(json!({"email": "TEST@example.com", "password": "password123"})),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], user.id.as_str());
    assert_ne!(body["token"], user.token.as_str());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let db = TestDatabase::new().await;
    let app = test_app(&db);
    create_test_user(&test_service(&db), "test@example.com", "password123").await;

    for (email, password) in [("test@example.com", "wrongpassword"), ("nobody@example.com", "password123")] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/auth/login",
            Some(json!({"email": email, "password": password})),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "invalid credentials");
    }
}

#[tokio::test]
async fn test_get_me() {
    let db = TestDatabase::new().await;
    let app = test_app(&db);
    let user = create_test_user(&test_service(&db), "test@example.com", "password123").await;

    let (status, body) = send(&app, Method::GET, "/api/auth/me", None, Some(&user.token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], user.id.as_str());
    assert_eq!(body["email"], "test@example.com");
}

#[tokio::test]
async fn test_get_me_requires_valid_token() {
    let db = TestDatabase::new().await;
    let app = test_app(&db);

    let (status, _) = send(&app, Method::GET, "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, Method::GET, "/api/auth/me", None, Some("invalid_token")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], 401);
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let db = TestDatabase::new().await;
    let app = test_app(&db);
    let user = create_test_user(&test_service(&db), "test@example.com", "password123").await;

    let (status, body) = send(&app, Method::POST, "/api/auth/logout", None, Some(&user.token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (status, _) = send(&app, Method::GET, "/api/auth/me", None, Some(&user.token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::POST, "/api/auth/logout", None, Some(&user.token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_all_revokes_every_session() {
    let db = TestDatabase::new().await;
    let app = test_app(&db);
    let service = test_service(&db);
    let user = create_test_user(&service, "test@example.com", "password123").await;
    let other = assert_ok!(service.login("test@example.com", "password123").await);

    let (status, body) = send(&app, Method::POST, "/api/auth/logout-all", None, Some(&user.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["revoked"], 2);

    let (status, _) = send(&app, Method::GET, "/api/auth/me", None, Some(&other.token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(db.session_count().await, 0);
}

#[tokio::test]
async fn test_health_and_fallback() {
    let db = TestDatabase::new().await;
    let app = test_app(&db);

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");

    let (status, _) = send(&app, Method::GET, "/api/unknown", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
