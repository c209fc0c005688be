/**
 * Logout Handlers
 *
 * POST /api/auth/logout revokes the session behind the bearer token. The
 * token stops validating immediately even though its `exp` is still in the
 * future.
 *
 * POST /api/auth/logout-all revokes every session of the caller, including
 * the one used to make the request.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::LogoutAllResponse;
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// Logout handler
///
/// # Returns
///
/// `204 No Content` once the session record is deleted
///
/// # Errors
///
/// * `401 Unauthorized` - If the token is missing or invalid
/// * `500 Internal Server Error` - If the session store fails
pub async fn logout(
    State(auth): State<AuthService>,
    AuthUser(session): AuthUser,
) -> Result<StatusCode, BackendError> {
    auth.logout(&session.token).await?;
    tracing::info!("User {} logged out", session.user_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Log out everywhere
///
/// # Returns
///
/// The number of sessions revoked
pub async fn logout_all(
    State(auth): State<AuthService>,
    AuthUser(session): AuthUser,
) -> Result<Json<LogoutAllResponse>, BackendError> {
    let revoked = auth.logout_everywhere(&session.user_id).await?;
    Ok(Json(LogoutAllResponse { revoked }))
}
