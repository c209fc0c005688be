/**
 * API Route Handlers
 *
 * This module defines the authentication API routes.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 *
 * ## Session Required
 * - `POST /api/auth/logout` - Revoke the current session
 * - `POST /api/auth/logout-all` - Revoke every session of the user
 * - `GET /api/auth/me` - Get current user info
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, logout, logout_all, register};
use crate::backend::middleware::require_session;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - Supplies the service the session guard validates with
///
/// # Returns
///
/// Router with API routes configured
///
/// # Authentication
///
/// Session routes are wrapped in `require_session`, which rejects requests
/// without a valid `Authorization: Bearer` token before the handler runs.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/logout-all", post(logout_all))
        .route("/api/auth/me", get(get_me))
        .route_layer(from_fn_with_state(app_state.auth.clone(), require_session));

    router
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .merge(protected)
}
