//! Database test fixtures and utilities
//!
//! Every fixture is a private in-memory SQLite database with migrations
//! applied, so tests are isolated without any cleanup.

use std::sync::Arc;

use shellkit::backend::auth::store::{SessionStore, UserStore};
use shellkit::backend::db::SqliteStore;

/// Test database fixture
pub struct TestDatabase {
    store: SqliteStore,
}

impl TestDatabase {
    /// Create a new migrated in-memory database
    pub async fn new() -> Self {
        let store = SqliteStore::in_memory()
            .await
            .expect("Failed to create in-memory database");
        Self { store }
    }

    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    pub fn users(&self) -> Arc<dyn UserStore> {
        Arc::new(self.store.clone())
    }

    pub fn sessions(&self) -> Arc<dyn SessionStore> {
        Arc::new(self.store.clone())
    }

    /// Number of stored session records
    pub async fn session_count(&self) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sessions")
            .fetch_one(self.store.pool())
            .await
            .expect("Failed to count sessions");
        count
    }
}
