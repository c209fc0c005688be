/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication handlers.
 * These types are shared across the register, login and get_me handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::auth::service::Registration;
use crate::backend::auth::users::User;

/// Registration request
///
/// Contains the display name, email and password for a new account.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Display name (at least 2 characters)
    pub name: String,
    /// User's email address
    pub email: String,
    /// User's password (at least 8 characters, hashed before storage)
    pub password: String,
    /// Repeated password; checked against `password` when supplied
    #[serde(default)]
    pub confirm_password: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(request: RegisterRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password: request.password,
            confirm_password: request.confirm_password,
        }
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Auth response
///
/// Returned by register and login handlers. Contains the session token
/// and user information for immediate authentication.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Session token (7-day expiration)
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// Logout-everywhere response
#[derive(Serialize, Deserialize, Debug)]
pub struct LogoutAllResponse {
    /// Number of sessions revoked
    pub revoked: u64,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// Does not include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// Display name
    pub name: String,
    /// User's email address
    pub email: String,
    /// Account creation time
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
