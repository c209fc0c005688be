//! Authentication Module
//!
//! This module handles credential hashing, session issuance and validation,
//! and the registration/login/logout flows built on top of them.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`passwords`** - bcrypt credential hasher
//! - **`sessions`** - Token claims, session records and signing keys
//! - **`issuer`** - Mints tokens and persists their session records
//! - **`validator`** - Verifies tokens against signature, expiry and the store
//! - **`store`** - `SessionStore`/`UserStore` traits and the in-memory store
//! - **`users`** - User model
//! - **`service`** - Account flows (`AuthService`)
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── errors.rs       - AuthError
//! ├── passwords.rs    - PasswordHasher
//! ├── sessions.rs     - Claims, SessionRecord, SessionKeys
//! ├── issuer.rs       - SessionIssuer
//! ├── validator.rs    - SessionValidator
//! ├── store.rs        - Store traits, StoreError, MemoryStore
//! ├── users.rs        - User model
//! ├── service.rs      - AuthService
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, e-mail and password validated → password hashed → user stored → session issued
//! 2. **Login**: password verified against the stored hash → session issued
//! 3. **Request**: bearer token validated → user ID attached to the request
//! 4. **Logout**: session record deleted → token rejected from then on
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 10 by default) and never returned
//! - Tokens are HS256 JWTs signed with the configured secret
//! - Sessions expire 7 days after issuance and cannot be renewed
//! - Every validation consults the session store, so logout takes effect immediately
//! - Invalid credentials return 401 without saying which part was wrong

/// Authentication errors
pub mod errors;

/// Credential hashing
pub mod passwords;

/// Token claims, session records and keys
pub mod sessions;

/// Session issuance
pub mod issuer;

/// Session validation
pub mod validator;

/// Persistence traits and the in-memory store
pub mod store;

/// User model
pub mod users;

/// Account flows
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use errors::AuthError;
pub use issuer::SessionIssuer;
pub use passwords::PasswordHasher;
pub use service::{AccountError, AuthService, Registration, SignedIn};
pub use sessions::{Claims, SessionKeys, SessionRecord, SESSION_TTL_DAYS};
pub use store::{MemoryStore, SessionStore, StoreError, UserStore};
pub use users::{NewUser, User};
pub use validator::{Rejection, SessionValidator, TokenStatus};

pub use handlers::types::{AuthResponse, LoginRequest, LogoutAllResponse, RegisterRequest, UserResponse};
pub use handlers::{get_me, login, logout, logout_all, register};
