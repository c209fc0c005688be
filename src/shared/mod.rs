//! Shared Module
//!
//! Types with no server dependencies: configuration, account form
//! validation and the shared error type. Everything here compiles without
//! the `ssr` feature.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Account form validation
pub mod validation;

pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
