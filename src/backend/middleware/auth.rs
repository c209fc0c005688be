/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts the bearer token from the
 * Authorization header, validates it through the session validator and
 * attaches the session to the request for handlers.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Session data attached to authenticated requests
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: String,
    /// The bearer token, kept so logout can revoke exactly this session
    pub token: String,
}

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Validates it (signature, expiry and session record)
/// 3. Attaches an [`AuthenticatedUser`] to the request extensions
///
/// Returns 401 Unauthorized if the token is missing or invalid, and 500 if
/// the session store cannot be reached.
pub async fn require_session(
    State(auth): State<AuthService>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers())
        .ok_or_else(|| {
            tracing::warn!("Missing or malformed Authorization header");
            BackendError::unauthorized("missing bearer token")
        })?
        .to_string();

    let user_id = auth.validator().validate(&token).await?.ok_or_else(|| {
        tracing::warn!("Rejected invalid session token");
        BackendError::unauthorized("invalid or expired session")
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id, token });

    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// Reads the [`AuthenticatedUser`] set by [`require_session`]; rejects with
/// 401 on routes the middleware did not run on.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized("missing session")
            })?;

        Ok(AuthUser(user))
    }
}
