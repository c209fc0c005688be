//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - Authentication API routes
//! ```
//!
//! # Routes
//!
//! - `GET /health` - Liveness probe
//! - `POST /api/auth/register` - User registration
//! - `POST /api/auth/login` - User login
//! - `POST /api/auth/logout` - Revoke the current session
//! - `POST /api/auth/logout-all` - Revoke every session of the user
//! - `GET /api/auth/me` - Get current user

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
