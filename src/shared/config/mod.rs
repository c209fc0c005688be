//! Application configuration module
//!
//! Provides the configuration for the auth server: where sessions and users
//! are stored, which port to listen on, the session signing secret and the
//! password hashing work factor.
//!
//! # Configuration Sources
//!
//! Values are read from the environment (`SESSION_SECRET`, `DATABASE_URL`,
//! `SERVER_PORT`, `HASH_COST`) or assembled with [`AppConfig::builder`].
//! Unlike the other settings the signing secret has no default: a server
//! that cannot sign tokens refuses to start.

use thiserror::Error;

/// Default work factor for password hashes
pub const DEFAULT_HASH_COST: u32 = 10;

/// Smallest work factor bcrypt accepts
pub const MIN_HASH_COST: u32 = 4;

/// Largest work factor bcrypt accepts
pub const MAX_HASH_COST: u32 = 31;

/// Minimum length of the session signing secret, in bytes
pub const MIN_SECRET_LEN: usize = 32;

/// Default database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite://shellkit.db";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Database connection URL
    pub database_url: String,
    /// HTTP port to listen on
    pub server_port: u16,
    /// Symmetric secret used to sign session tokens
    pub session_secret: String,
    /// bcrypt work factor for new password hashes
    pub hash_cost: u32,
}

// The secret stays out of logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &self.database_url)
            .field("server_port", &self.server_port)
            .field("session_secret", &"<redacted>")
            .field("hash_cost", &self.hash_cost)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary key lookup
    ///
    /// # Arguments
    /// * `lookup` - Returns the raw value for a variable name, if set
    ///
    /// # Returns
    /// A validated configuration, or the first problem found
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(secret) = lookup("SESSION_SECRET") {
            builder = builder.session_secret(secret);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            let port = port.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                message: e.to_string(),
            })?;
            builder = builder.server_port(port);
        }
        if let Some(cost) = lookup("HASH_COST") {
            let cost = cost.trim().parse::<u32>().map_err(|e| ConfigError::InvalidValue {
                key: "HASH_COST",
                message: e.to_string(),
            })?;
            builder = builder.hash_cost(cost);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session_secret.is_empty() {
            return Err(ConfigError::MissingValue("SESSION_SECRET"));
        }
        if self.session_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::InvalidValue {
                key: "SESSION_SECRET",
                message: format!("must be at least {} bytes", MIN_SECRET_LEN),
            });
        }
        if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&self.hash_cost) {
            return Err(ConfigError::InvalidValue {
                key: "HASH_COST",
                message: format!("must be between {} and {}", MIN_HASH_COST, MAX_HASH_COST),
            });
        }
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    server_port: Option<u16>,
    session_secret: Option<String>,
    hash_cost: Option<u32>,
}

impl AppConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the HTTP port
    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Set the session signing secret
    pub fn session_secret(mut self, secret: impl Into<String>) -> Self {
        self.session_secret = Some(secret.into());
        self
    }

    /// Set the password hashing work factor
    pub fn hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = Some(cost);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            server_port: self.server_port.unwrap_or(DEFAULT_SERVER_PORT),
            session_secret: self
                .session_secret
                .ok_or(ConfigError::MissingValue("SESSION_SECRET"))?,
            hash_cost: self.hash_cost.unwrap_or(DEFAULT_HASH_COST),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}
