/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract the parts they
 * need (`State<AuthService>`) without taking the whole `AppState`.
 */

use axum::extract::FromRef;

use crate::backend::auth::service::AuthService;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Account flows, session issuer and validator
    pub auth: AuthService,
}

impl AppState {
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
