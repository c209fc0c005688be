/**
 * Server Configuration
 *
 * Turns an [`AppConfig`] into the running server's collaborators: the
 * SQLite store (connected and migrated) and the account service.
 *
 * # Error Handling
 *
 * Unlike optional integrations, persistence is required: a store that
 * cannot connect or migrate aborts startup.
 */

use std::sync::Arc;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::store::StoreError;
use crate::backend::db::SqliteStore;
use crate::shared::config::AppConfig;

/// Connect to `config.database_url` and run migrations
pub async fn load_store(config: &AppConfig) -> Result<SqliteStore, StoreError> {
    SqliteStore::connect(&config.database_url).await.map_err(|e| {
        tracing::error!("Failed to open database {}: {}", config.database_url, e);
        e
    })
}

/// Build the account service over a SQLite store
pub fn auth_service(config: &AppConfig, store: SqliteStore) -> AuthService {
    let store = Arc::new(store);
    AuthService::new(config, store.clone(), store)
}
