/**
 * Authentication Error Types
 *
 * Errors raised by the hasher, issuer and validator. Every variant is a
 * system fault: a rejected token is a normal
 * [`TokenStatus::Invalid`](super::validator::TokenStatus) outcome and never
 * an `AuthError`.
 */

use thiserror::Error;

use crate::backend::auth::store::StoreError;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed stored hash, empty password or entropy failure
    #[error("hashing error: {message}")]
    Hashing { message: String },

    /// The session record could not be written during issuance
    #[error("session persistence error: {0}")]
    SessionPersistence(#[source] StoreError),

    /// The session store failed while validating or revoking
    #[error("session store error: {0}")]
    SessionStore(#[source] StoreError),

    /// The token could not be signed
    #[error("token signing error: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

impl AuthError {
    pub fn hashing(message: impl Into<String>) -> Self {
        Self::Hashing {
            message: message.into(),
        }
    }
}
