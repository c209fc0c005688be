//! Server Module
//!
//! This module contains the code that initializes and configures the Axum
//! HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Store loading and service wiring
//! └── init.rs         - App creation and the session reaper
//! ```
//!
//! # State Management
//!
//! `AppState` holds the `AuthService`, which owns the session issuer,
//! validator and the store handles. Everything inside is `Arc`-shared, so
//! cloning the state per request is cheap.

/// Application state management
pub mod state;

/// Store loading and service wiring
pub mod config;

/// Server initialization
pub mod init;

pub use init::{create_app, create_app_with_stores, spawn_session_reaper};
pub use state::AppState;
