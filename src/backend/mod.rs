//! Backend Module
//!
//! This module contains all server-side code: credential hashing, session
//! issuance and validation, persistence, and the Axum HTTP surface over them.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`auth`** - Hasher, session issuer/validator, store traits, account service, handlers
//! - **`db`** - SQLite implementation of the store traits
//! - **`server`** - Application state, store loading, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`middleware`** - Session guard and `AuthUser` extractor
//! - **`error`** - `BackendError` and its HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── auth/           - Authentication core and handlers
//! ├── db/             - SQLite persistence
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Thread Safety
//!
//! Handlers share one `AppState`. The account service inside it holds
//! `Arc`-wrapped keys and `Arc<dyn Store>` handles; stores do their own
//! locking (`tokio::sync::RwLock` in memory, the pool for SQLite).

/// Authentication and user management
pub mod auth;

/// SQLite persistence
pub mod db;

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::create_app;
