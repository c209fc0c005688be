/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate name, email, password and confirmation
 * 2. Check the email is not already registered
 * 3. Hash password using bcrypt
 * 4. Create user in the store
 * 5. Issue a session token
 * 6. Return token and user info
 *
 * # Validation
 *
 * - Name must be at least 2 characters
 * - Email must look like `local@domain.tld`
 * - Password must be at least 8 characters long
 * - `confirm_password`, when given, must equal `password`
 * - Email must be unique (compared case-insensitively)
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Register handler
///
/// # Arguments
///
/// * `State(auth)` - Account service
/// * `payload` - Registration request
///
/// # Returns
///
/// JSON response with session token and user info
///
/// # Errors
///
/// * `400 Bad Request` - If the body is not valid JSON or a field fails validation
/// * `409 Conflict` - If the email is already registered
/// * `500 Internal Server Error` - If hashing, persistence or signing fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Jane Doe",
///   "email": "user@example.com",
///   "password": "securepassword123",
///   "confirm_password": "securepassword123"
/// }
/// ```
pub async fn register(
    State(auth): State<AuthService>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;
    tracing::info!("Register request for email: {}", request.email);

    let signed_in = auth.register(request.into()).await?;

    Ok(Json(AuthResponse {
        token: signed_in.token,
        user: signed_in.user.into(),
    }))
}
