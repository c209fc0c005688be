/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including store loading, state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and run migrations
 * 2. Build the account service from config and store
 * 3. Create the router
 * 4. Start the expired-session reaper
 */

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use chrono::Utc;
use tokio::task::JoinHandle;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::store::{SessionStore, StoreError, UserStore};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{auth_service, load_store};
use crate::backend::server::state::AppState;
use crate::shared::config::AppConfig;

/// How often expired session records are purged
pub const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Validated application configuration
///
/// # Returns
///
/// Router ready to serve, or the store error that prevented startup
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing shellkit backend server");

    let store = load_store(config).await?;
    let auth = auth_service(config, store);

    spawn_session_reaper(auth.sessions().clone(), SESSION_PURGE_INTERVAL);
    tracing::info!("Router configured with periodic session purge");

    Ok(create_router(AppState::new(auth)))
}

/// Create the application over caller-supplied stores
///
/// Starts no background tasks. Used by tests and embedders that manage
/// their own persistence.
pub fn create_app_with_stores(
    config: &AppConfig,
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
) -> Router<()> {
    create_router(AppState::new(AuthService::new(config, users, sessions)))
}

/// Periodically delete expired session records
///
/// Failures are logged and retried on the next tick.
pub fn spawn_session_reaper(sessions: Arc<dyn SessionStore>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            match sessions.purge_expired(Utc::now()).await {
                Ok(removed) => tracing::debug!("Session purge removed {} records", removed),
                Err(e) => tracing::warn!("Session purge failed: {}", e),
            }
        }
    })
}
