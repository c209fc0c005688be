/**
 * User Model
 *
 * This module defines the user identity shared by the account flows and
 * the stores. Database access lives behind [`UserStore`](super::store::UserStore).
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User struct representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID v4, stored as text)
    pub id: String,
    /// Display name
    pub name: String,
    /// Normalized (lowercase) e-mail address, unique
    pub email: String,
    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields needed to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// Materialize the row with a fresh ID and creation time
    pub fn into_user(self, now: DateTime<Utc>) -> User {
        User {
            id: uuid::Uuid::new_v4().to_string(),
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            created_at: now,
        }
    }
}
