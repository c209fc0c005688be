//! Shared Error Types
//!
//! This module defines error types that are shared between the account
//! forms and the backend. These errors represent common failure cases that
//! can occur in both contexts.
//!
//! # Error Categories
//!
//! - `ValidationError` - Form field validation failures
//!
//! # Usage
//!
//! ```rust
//! use shellkit::shared::error::SharedError;
//!
//! // Create a validation error
//! let error = SharedError::validation("email", "Invalid email address");
//! ```
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread boundaries.
use thiserror::Error;

/// Shared error types that can occur in both frontend and backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Form field validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field, for validation errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
        }
    }
}
