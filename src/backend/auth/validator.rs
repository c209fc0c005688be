/**
 * Session Validator
 *
 * Verifies session tokens and recovers the user they were issued for.
 *
 * # Validation Steps
 *
 * 1. Signature and structure: anything not signed with our key, or not
 *    shaped like our claims, is `Malformed`.
 * 2. Expiry: the embedded `exp` must be strictly after `now`.
 * 3. Store cross-check: the backing session record must still exist, belong
 *    to the token's subject and be unexpired. A deleted record (logout, or
 *    a cascade from a deleted user) makes the token `Revoked` even though
 *    its signature and `exp` are still good.
 *
 * Rejections are ordinary outcomes. The only error is a failing store
 * lookup, which propagates without retry.
 */

use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, Validation};

use crate::backend::auth::errors::AuthError;
use crate::backend::auth::sessions::{Claims, SessionKeys, SESSION_ALGORITHM};
use crate::backend::auth::store::SessionStore;

/// Why a token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Bad signature, foreign key, garbage or missing claims
    Malformed,
    /// Past its expiry
    Expired,
    /// No matching session record
    Revoked,
}

/// Outcome of validating a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStatus {
    Valid { user_id: String },
    Invalid(Rejection),
}

impl TokenStatus {
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::Valid { user_id } => Some(user_id),
            Self::Invalid(_) => None,
        }
    }

    pub fn into_user_id(self) -> Option<String> {
        match self {
            Self::Valid { user_id } => Some(user_id),
            Self::Invalid(_) => None,
        }
    }
}

/// Session validator
#[derive(Clone)]
pub struct SessionValidator {
    keys: Arc<SessionKeys>,
    store: Arc<dyn SessionStore>,
    validation: Validation,
}

impl SessionValidator {
    pub fn new(keys: Arc<SessionKeys>, store: Arc<dyn SessionStore>) -> Self {
        let mut validation = Validation::new(SESSION_ALGORITHM);
        // Expiry is checked against the caller's clock in `check_at`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            keys,
            store,
            validation,
        }
    }

    /// Validate a token as of now
    ///
    /// # Returns
    /// `Some(user_id)` for a live session, `None` for any rejected token
    pub async fn validate(&self, token: &str) -> Result<Option<String>, AuthError> {
        Ok(self.check_at(token, Utc::now()).await?.into_user_id())
    }

    /// Validate a token at a given instant, reporting why it was rejected
    pub async fn check_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenStatus, AuthError> {
        let claims = match self.decode(token) {
            Some(claims) => claims,
            None => return Ok(TokenStatus::Invalid(Rejection::Malformed)),
        };

        let expires_at = match DateTime::from_timestamp(claims.exp, 0) {
            Some(expires_at) => expires_at,
            None => return Ok(TokenStatus::Invalid(Rejection::Malformed)),
        };
        if now >= expires_at {
            tracing::debug!("Rejected expired session token for user {}", claims.sub);
            return Ok(TokenStatus::Invalid(Rejection::Expired));
        }

        let record = self
            .store
            .find_session_by_token(token)
            .await
            .map_err(|e| {
                tracing::error!("Session lookup failed: {}", e);
                AuthError::SessionStore(e)
            })?;

        let record = match record {
            Some(record) if record.user_id == claims.sub => record,
            Some(_) => {
                tracing::warn!("Session record owner does not match token subject {}", claims.sub);
                return Ok(TokenStatus::Invalid(Rejection::Revoked));
            }
            None => {
                tracing::debug!("Rejected revoked session token for user {}", claims.sub);
                return Ok(TokenStatus::Invalid(Rejection::Revoked));
            }
        };

        if !record.is_valid_at(now) {
            return Ok(TokenStatus::Invalid(Rejection::Expired));
        }

        Ok(TokenStatus::Valid { user_id: claims.sub })
    }

    fn decode(&self, token: &str) -> Option<Claims> {
        if token.is_empty() {
            return None;
        }
        match decode::<Claims>(token, &self.keys.decoding, &self.validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!("Rejected malformed session token: {}", e);
                None
            }
        }
    }
}
