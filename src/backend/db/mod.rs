//! SQLite Persistence
//!
//! This module provides `SqliteStore`, the sqlx-backed implementation of
//! [`UserStore`](crate::backend::auth::store::UserStore) and
//! [`SessionStore`](crate::backend::auth::store::SessionStore).
//!
//! # Module Structure
//!
//! ```text
//! db/
//! ├── mod.rs      - Pool setup and migrations
//! ├── users.rs    - UserStore implementation
//! └── sessions.rs - SessionStore implementation
//! ```
//!
//! # Schema
//!
//! The embedded migrations under `migrations/` create two tables:
//! - `users` - unique `email`
//! - `sessions` - unique `token`, `user_id` references `users(id)` with
//!   `ON DELETE CASCADE`, `expires_at` in Unix seconds
//!
//! Foreign keys are switched on for every connection so the cascade fires.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::auth::store::StoreError;

/// UserStore implementation
pub mod users;

/// SessionStore implementation
pub mod sessions;

/// Store backed by a SQLite connection pool
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to a database URL and bring its schema up to date
    ///
    /// # Arguments
    /// * `database_url` - e.g. `sqlite://shellkit.db`; the file is created if missing
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");

        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = if is_in_memory(database_url) {
            pinned_pool().connect_with(options).await?
        } else {
            SqlitePoolOptions::new().connect_with(options).await?
        };

        tracing::info!("Database connection pool created successfully");

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Open a private in-memory database
    ///
    /// sqlx gives each `sqlite::memory:` pool one shared-cache database that
    /// lives only while a connection to it is open, so the pool holds a
    /// single connection that is never reaped.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = pinned_pool().connect_with(options).await?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Run the embedded migrations
    pub async fn migrate(&self) -> Result<(), StoreError> {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    /// Underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// One connection, never closed for idleness or age
fn pinned_pool() -> SqlitePoolOptions {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
}

/// Translate unique-constraint violations into `StoreError::Conflict`
pub(crate) fn map_unique(err: sqlx::Error, what: &str) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::conflict(what),
        _ => StoreError::Database(err),
    }
}
