/**
 * Session Issuer
 *
 * Mints signed, time-bounded session tokens and persists the backing
 * session record before handing the token out.
 *
 * # Guarantees
 *
 * - No token is returned unless its record was written: a store failure
 *   yields `AuthError::SessionPersistence` and the signed token is dropped.
 * - Tokens are unique even for the same user within the same second, since
 *   each carries a fresh random `jti`.
 */

use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use jsonwebtoken::{encode, Header};

use crate::backend::auth::errors::AuthError;
use crate::backend::auth::sessions::{session_ttl, Claims, SessionKeys, SessionRecord, SESSION_ALGORITHM};
use crate::backend::auth::store::SessionStore;

/// Session issuer
#[derive(Clone)]
pub struct SessionIssuer {
    keys: Arc<SessionKeys>,
    store: Arc<dyn SessionStore>,
}

impl SessionIssuer {
    pub fn new(keys: Arc<SessionKeys>, store: Arc<dyn SessionStore>) -> Self {
        Self { keys, store }
    }

    /// Issue a session token for a user, as of now
    pub async fn issue(&self, user_id: &str) -> Result<String, AuthError> {
        self.issue_at(user_id, Utc::now()).await
    }

    /// Issue a session token for a user at a given instant
    ///
    /// # Arguments
    /// * `user_id` - Subject of the token
    /// * `now` - Issuance time; truncated to whole seconds so the token's
    ///   `exp` and the record's `expires_at` agree exactly
    ///
    /// # Returns
    /// The signed token, after its record has been stored
    pub async fn issue_at(&self, user_id: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
        let issued_at = now.trunc_subsecs(0);
        let expires_at = issued_at + session_ttl();
        let session_id = uuid::Uuid::new_v4().to_string();

        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: session_id.clone(),
        };

        let token = encode(&Header::new(SESSION_ALGORITHM), &claims, &self.keys.encoding)?;

        let record = SessionRecord {
            id: session_id,
            user_id: user_id.to_string(),
            token,
            expires_at,
        };

        if let Err(e) = self.store.insert_session(&record).await {
            tracing::error!("Failed to persist session for user {}: {}", user_id, e);
            return Err(AuthError::SessionPersistence(e));
        }

        tracing::debug!("Issued session {} for user {}", record.id, user_id);
        Ok(record.token)
    }
}
