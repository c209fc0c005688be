//! shellkit - Authentication and Session Core
//!
//! shellkit provides password-based accounts with stateful, signed session
//! tokens, plus a small Axum JSON API over them.
//!
//! # Overview
//!
//! - bcrypt credential hashing
//! - 7-day HS256 session tokens, each backed by a stored session record
//! - Validation that checks signature, expiry and the session store, so
//!   logout revokes a token immediately
//! - Registration, login, logout and "log out everywhere" flows
//! - SQLite persistence through sqlx, or an in-memory store
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration, form validation and shared error types
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend: hashing, tokens, stores, HTTP server
//!
//! # Usage
//!
//! ```rust,no_run
//! use shellkit::backend::server::create_app;
//! use shellkit::shared::config::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.server_port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
