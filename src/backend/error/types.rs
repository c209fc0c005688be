/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers and
 * middleware, and how each failure maps to a status code.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - Request bodies that are not the expected JSON (400)
 * - Form validation failures (400)
 * - Missing, malformed, expired or revoked session tokens (401)
 * - Wrong credentials (401)
 * - An email that is already registered (409)
 *
 * ## Server Errors
 *
 * Hashing, signing and store failures are 500s. Their details are logged
 * but never sent to the client.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::errors::AuthError;
use crate::backend::auth::service::AccountError;
use crate::shared::error::SharedError;

/// Message sent in place of any 5xx detail
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use shellkit::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
///
/// let err = BackendError::unauthorized("missing bearer token");
/// assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Request lacks a valid session
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Failure from an account flow
    #[error(transparent)]
    Account(#[from] AccountError),

    /// Failure while validating a session outside an account flow
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl BackendError {
    /// Create a new handler error with a status code
    ///
    /// # Arguments
    ///
    /// * `status` - HTTP status code
    /// * `message` - Error message
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Account(Validation)` - 400 Bad Request
    /// - `Account(InvalidCredentials)` - 401 Unauthorized
    /// - `Account(EmailTaken)` - 409 Conflict
    /// - `Account(Auth | Store)`, `Auth` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Account(err) => match err {
                AccountError::Validation(_) => StatusCode::BAD_REQUEST,
                AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AccountError::EmailTaken => StatusCode::CONFLICT,
                AccountError::Auth(_) | AccountError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// 5xx errors all report [`INTERNAL_ERROR_MESSAGE`].
    pub fn message(&self) -> String {
        if self.status_code().is_server_error() {
            return INTERNAL_ERROR_MESSAGE.to_string();
        }
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Unauthorized { message } => message.clone(),
            Self::Account(AccountError::Validation(SharedError::ValidationError { message, .. })) => {
                message.clone()
            }
            Self::Account(err) => err.to_string(),
            Self::Auth(err) => err.to_string(),
        }
    }

    /// Form field that failed validation, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Account(AccountError::Validation(err)) => err.field(),
            _ => None,
        }
    }
}

/// A body that is not JSON or does not fit the request type
///
/// Always a 400, including the missing-field case axum reports as 422.
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        Self::handler(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}
