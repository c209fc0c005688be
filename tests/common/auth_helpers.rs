//! Authentication test helpers
//!
//! Provides utilities for creating test users, building the app under test,
//! and driving it with JSON requests.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use shellkit::backend::auth::service::{AuthService, Registration};
use shellkit::backend::server::create_app_with_stores;
use shellkit::shared::config::{AppConfig, MIN_HASH_COST};

use super::database::TestDatabase;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Configuration with the cheapest bcrypt cost
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .database_url("sqlite::memory:")
        .session_secret(TEST_SECRET)
        .hash_cost(MIN_HASH_COST)
        .build()
        .expect("Failed to build test config")
}

/// Account service over a test database
pub fn test_service(db: &TestDatabase) -> AuthService {
    AuthService::new(&test_config(), db.users(), db.sessions())
}

/// Router over a test database
pub fn test_app(db: &TestDatabase) -> Router {
    create_app_with_stores(&test_config(), db.users(), db.sessions())
}

/// Test user credentials
pub struct TestUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Register a user through the account service
pub async fn create_test_user(service: &AuthService, email: &str, password: &str) -> TestUser {
    let signed_in = service
        .register(Registration {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: None,
        })
        .await
        .expect("Failed to register test user");

    TestUser {
        id: signed_in.user.id,
        email: signed_in.user.email,
        password: password.to_string(),
        token: signed_in.token,
    }
}

/// Register a user with a unique email
pub async fn create_unique_test_user(service: &AuthService) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    create_test_user(service, &email, "test_password_123").await
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Send one request to the app and decode the JSON body
///
/// Empty bodies decode to `Value::Null`.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", auth_header(token));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    dispatch(app, request).await
}

/// Send a raw, possibly malformed, JSON-typed body
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    dispatch(app, request).await
}

async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("Router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}
