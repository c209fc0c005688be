//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//! Handlers are thin: they translate between JSON and [`AuthService`]
//! calls and let [`BackendError`] pick the status code.
//!
//! [`AuthService`]: crate::backend::auth::AuthService
//! [`BackendError`]: crate::backend::error::BackendError
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── logout.rs   - Session revocation handlers
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`logout`** - POST /api/auth/logout - Revoke the current session
//! - **`logout_all`** - POST /api/auth/logout-all - Revoke every session of the user
//! - **`get_me`** - GET /api/auth/me - Get current user info

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Get current user handler
pub mod me;

pub use types::{AuthResponse, LoginRequest, LogoutAllResponse, RegisterRequest, UserResponse};

pub use login::login;
pub use logout::{logout, logout_all};
pub use me::get_me;
pub use register::register;
