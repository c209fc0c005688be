/**
 * Password Hashing
 *
 * One-way transform of plaintext passwords into storable bcrypt hashes and
 * the matching verifier.
 *
 * # Hash Format
 *
 * Hashes are self-describing modular-crypt strings (`$2b$<cost>$<salt+hash>`),
 * so a stored hash keeps verifying after the configured work factor changes.
 * Every call draws a fresh random salt: hashing the same password twice
 * yields two different strings.
 *
 * # Work Factor
 *
 * The cost defaults to [`DEFAULT_HASH_COST`] (2^10 rounds, roughly 50-100ms
 * per call on server hardware). It comes from configuration, never from a
 * request.
 */

use crate::backend::auth::AuthError;
use crate::shared::config::DEFAULT_HASH_COST;

/// Credential hasher
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_COST)
    }
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt work factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Work factor encoded into new hashes
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password
    ///
    /// # Arguments
    /// * `plaintext` - Non-empty password
    ///
    /// # Returns
    /// A salted, self-describing hash string
    ///
    /// # Errors
    /// `AuthError::Hashing` for an empty password, an out-of-range cost or
    /// an unavailable random source
    pub fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        if plaintext.is_empty() {
            return Err(AuthError::hashing("password must not be empty"));
        }

        bcrypt::hash(plaintext, self.cost).map_err(|e| {
            tracing::error!("Password hashing failed: {}", e);
            AuthError::hashing(e.to_string())
        })
    }

    /// Check a plaintext password against a stored hash
    ///
    /// A mismatch is `Ok(false)`, never an error.
    ///
    /// # Errors
    /// `AuthError::Hashing` if `hash` was not produced by this hasher
    pub fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, AuthError> {
        bcrypt::verify(plaintext, hash).map_err(|e| {
            tracing::error!("Stored password hash is malformed: {}", e);
            AuthError::hashing(e.to_string())
        })
    }
}
