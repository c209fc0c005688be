//! Middleware Module
//!
//! This module contains HTTP middleware for the backend server.
//!
//! - **`auth`** - `require_session` guard and the `AuthUser` extractor
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use shellkit::backend::middleware::require_session;
//!
//! let protected = Router::new()
//!     .route("/api/auth/me", get(get_me))
//!     .route_layer(from_fn_with_state(auth_service, require_session));
//! ```

pub mod auth;

pub use auth::{bearer_token, require_session, AuthUser, AuthenticatedUser};
