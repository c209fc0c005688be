/**
 * Session and User Stores
 *
 * The issuer, validator and account flows talk to persistence only through
 * the two narrow traits in this module. `SqliteStore` (in `backend::db`)
 * implements them over sqlx; `MemoryStore` implements them in process for
 * tests and single-node development.
 *
 * # Concurrency
 *
 * Stores own their concurrency control: token and e-mail uniqueness are
 * enforced at insert time and reported as `StoreError::Conflict`. Callers
 * never retry; a failing call surfaces immediately.
 */

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::backend::auth::sessions::SessionRecord;
use crate::backend::auth::users::{NewUser, User};

/// Errors raised by store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated
    #[error("{what} already exists")]
    Conflict { what: String },

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The store cannot be reached
    #[error("store unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    pub fn conflict(what: impl Into<String>) -> Self {
        Self::Conflict { what: what.into() }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Persistence for session records
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Durably write a new record; duplicate tokens are a `Conflict`
    ///
    /// Owner checks differ by store: `SqliteStore` rejects a record whose
    /// `user_id` has no user row (`StoreError::Database`), `MemoryStore`
    /// keeps session and user maps independent and accepts it.
    async fn insert_session(&self, record: &SessionRecord) -> Result<(), StoreError>;

    /// Look up the record backing a token
    async fn find_session_by_token(&self, token: &str) -> Result<Option<SessionRecord>, StoreError>;

    /// Delete the record backing a token; deleting a missing token is a no-op
    async fn delete_session(&self, token: &str) -> Result<(), StoreError>;

    /// Delete every record owned by a user, returning how many were removed
    async fn delete_sessions_for_user(&self, user_id: &str) -> Result<u64, StoreError>;

    /// Delete every record with `expires_at <= now`, returning how many were removed
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, StoreError>;
}

/// Persistence for user accounts
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a user; a taken e-mail is a `Conflict`
    async fn insert_user(&self, new_user: NewUser) -> Result<User, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Delete a user and all of its sessions; returns whether the user existed
    async fn delete_user(&self, id: &str) -> Result<bool, StoreError>;
}

#[derive(Default)]
struct MemoryInner {
    users: HashMap<String, User>,
    sessions: HashMap<String, SessionRecord>,
}

/// In-process store
///
/// Cloning shares the same underlying maps. Sessions are not tied to
/// stored users, so the issuer and validator can be exercised without
/// registering accounts first.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored session records
    pub async fn session_count(&self) -> usize {
        self.inner.read().await.sessions.len()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn insert_session(&self, record: &SessionRecord) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if inner.sessions.contains_key(&record.token) {
            return Err(StoreError::conflict("session token"));
        }
        inner.sessions.insert(record.token.clone(), record.clone());
        Ok(())
    }

    async fn find_session_by_token(&self, token: &str) -> Result<Option<SessionRecord>, StoreError> {
        Ok(self.inner.read().await.sessions.get(token).cloned())
    }

    async fn delete_session(&self, token: &str) -> Result<(), StoreError> {
        self.inner.write().await.sessions.remove(token);
        Ok(())
    }

    async fn delete_sessions_for_user(&self, user_id: &str) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.sessions.len();
        inner.sessions.retain(|_, record| record.user_id != user_id);
        Ok((before - inner.sessions.len()) as u64)
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.sessions.len();
        inner.sessions.retain(|_, record| record.is_valid_at(now));
        Ok((before - inner.sessions.len()) as u64)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.users.values().any(|u| u.email == new_user.email) {
            return Err(StoreError::conflict("email"));
        }
        let user = new_user.into_user(Utc::now());
        inner.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.inner.read().await.users.get(id).cloned())
    }

    async fn delete_user(&self, id: &str) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let existed = inner.users.remove(id).is_some();
        // Same effect as the SQL cascade.
        inner.sessions.retain(|_, record| record.user_id != id);
        Ok(existed)
    }
}
