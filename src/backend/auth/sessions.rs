/**
 * Session Tokens and Records
 *
 * This module holds the pieces shared by the issuer and the validator:
 * the JWT claims, the durable session record and the signing keys.
 *
 * # Token Format
 *
 * Session tokens are HS256 JWTs carrying:
 * - `sub` - the user ID
 * - `iat` - issued-at, whole seconds since the Unix epoch
 * - `exp` - `iat` plus [`SESSION_TTL_DAYS`]
 * - `jti` - a random UUID, also used as the session record ID
 *
 * # Lifecycle
 *
 * A record is created by the issuer and is then either `Expired` (time
 * passes) or `Revoked` (the record is deleted, e.g. on logout). Both states
 * are terminal; there is no renewal.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
use serde::{Deserialize, Serialize};

/// Lifetime of every session, fixed by policy
pub const SESSION_TTL_DAYS: i64 = 7;

/// Signing algorithm for session tokens
pub const SESSION_ALGORITHM: Algorithm = Algorithm::HS256;

/// Session lifetime as a duration
pub fn session_ttl() -> Duration {
    Duration::days(SESSION_TTL_DAYS)
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Token ID, equal to the backing session record ID
    pub jti: String,
}

/// Durable session record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Record ID (the token's `jti`)
    pub id: String,
    /// Owning user; a weak reference
    pub user_id: String,
    /// The issued token, unique across sessions
    pub token: String,
    /// Absolute expiry
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    /// A record is valid iff `now < expires_at`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Symmetric keys derived from the configured session secret
///
/// Built once at startup and shared by the issuer and validator.
#[derive(Clone)]
pub struct SessionKeys {
    pub(crate) encoding: EncodingKey,
    pub(crate) decoding: DecodingKey,
}

impl SessionKeys {
    /// Derive keys from a raw secret
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

impl std::fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionKeys(<redacted>)")
    }
}
