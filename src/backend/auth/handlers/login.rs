/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a session token
 * 4. Return token and user info
 *
 * # Security
 *
 * - Unknown email and wrong password both return 401 "invalid credentials"
 * - Passwords are never logged or returned in responses
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Login handler
///
/// # Arguments
///
/// * `State(auth)` - Account service
/// * `payload` - Login request containing email and password
///
/// # Returns
///
/// JSON response with session token and user info
///
/// # Errors
///
/// * `400 Bad Request` - If the body is not valid JSON or lacks a field
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If the store, hashing or signing fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
pub async fn login(
    State(auth): State<AuthService>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;
    tracing::info!("Login request for: {}", request.email);

    let signed_in = auth.login(&request.email, &request.password).await?;

    Ok(Json(AuthResponse {
        token: signed_in.token,
        user: signed_in.user.into(),
    }))
}
