/**
 * Account Service
 *
 * The registration, login and logout flows, composed from the password
 * hasher, the session issuer/validator and the user and session stores.
 * HTTP handlers are thin wrappers around this type.
 *
 * # Hashing Off the Async Runtime
 *
 * bcrypt is deliberately slow, so hashing and verification run on tokio's
 * blocking pool instead of a request task.
 *
 * # Unknown E-mails
 *
 * Login for an unregistered e-mail still verifies the password, against a
 * placeholder hash made once at the configured cost, so both failure paths
 * do the same bcrypt work.
 */

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;

use crate::backend::auth::errors::AuthError;
use crate::backend::auth::issuer::SessionIssuer;
use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::auth::store::{SessionStore, StoreError, UserStore};
use crate::backend::auth::users::{NewUser, User};
use crate::backend::auth::validator::SessionValidator;
use crate::shared::config::AppConfig;
use crate::shared::error::SharedError;
use crate::shared::validation::{
    normalize_email, validate_confirmation, validate_email, validate_name, validate_password,
};

/// Errors from the account flows
#[derive(Debug, Error)]
pub enum AccountError {
    #[error(transparent)]
    Validation(#[from] SharedError),

    #[error("an account with this email already exists")]
    EmailTaken,

    /// Unknown e-mail or wrong password; deliberately indistinguishable
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Registration form data
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Repeated password, checked when present
    pub confirm_password: Option<String>,
}

impl Registration {
    /// Run the form rules, reporting the first failing field
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        validate_password(&self.password)?;
        if let Some(confirmation) = &self.confirm_password {
            validate_confirmation(&self.password, confirmation)?;
        }
        Ok(())
    }
}

/// A user together with a freshly issued session token
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub user: User,
    pub token: String,
}

/// Password behind the placeholder hash used for unknown e-mails
const PLACEHOLDER_PASSWORD: &str = "shellkit-placeholder-password";

/// Account service
#[derive(Clone)]
pub struct AuthService {
    hasher: PasswordHasher,
    placeholder_hash: Arc<OnceCell<String>>,
    issuer: SessionIssuer,
    validator: SessionValidator,
    users: Arc<dyn UserStore>,
    sessions: Arc<dyn SessionStore>,
}

impl AuthService {
    /// Wire the service from configuration and stores
    ///
    /// # Arguments
    /// * `config` - Supplies the signing secret and hash cost
    /// * `users` - User persistence
    /// * `sessions` - Session persistence
    pub fn new(config: &AppConfig, users: Arc<dyn UserStore>, sessions: Arc<dyn SessionStore>) -> Self {
        let keys = Arc::new(SessionKeys::from_secret(config.session_secret.as_bytes()));
        Self {
            hasher: PasswordHasher::new(config.hash_cost),
            placeholder_hash: Arc::new(OnceCell::new()),
            issuer: SessionIssuer::new(keys.clone(), sessions.clone()),
            validator: SessionValidator::new(keys, sessions.clone()),
            users,
            sessions,
        }
    }

    pub fn validator(&self) -> &SessionValidator {
        &self.validator
    }

    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    /// Create an account and sign it in
    pub async fn register(&self, registration: Registration) -> Result<SignedIn, AccountError> {
        registration.validate()?;
        let email = normalize_email(&registration.email);

        if self.users.find_user_by_email(&email).await?.is_some() {
            tracing::warn!("Registration rejected, email already in use: {}", email);
            return Err(AccountError::EmailTaken);
        }

        let password_hash = self.hash_password(registration.password).await?;

        let user = self
            .users
            .insert_user(NewUser {
                name: registration.name.trim().to_string(),
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent registration.
                StoreError::Conflict { .. } => AccountError::EmailTaken,
                other => AccountError::Store(other),
            })?;

        let token = self.issuer.issue(&user.id).await?;
        tracing::info!("Registered user {}", user.id);

        Ok(SignedIn { user, token })
    }

    /// Check credentials and issue a new session
    pub async fn login(&self, email: &str, password: &str) -> Result<SignedIn, AccountError> {
        let email = normalize_email(email);

        let user = match self.users.find_user_by_email(&email).await? {
            Some(user) => user,
            None => {
                let placeholder = self.placeholder_hash().await?;
                self.verify_password(password.to_string(), placeholder).await?;
                tracing::warn!("Login failed, unknown email: {}", email);
                return Err(AccountError::InvalidCredentials);
            }
        };

        if !self.verify_password(password.to_string(), user.password_hash.clone()).await? {
            tracing::warn!("Login failed, wrong password for user {}", user.id);
            return Err(AccountError::InvalidCredentials);
        }

        let token = self.issuer.issue(&user.id).await?;
        tracing::info!("User {} logged in", user.id);

        Ok(SignedIn { user, token })
    }

    /// Revoke the session behind a token
    pub async fn logout(&self, token: &str) -> Result<(), AccountError> {
        self.sessions
            .delete_session(token)
            .await
            .map_err(AuthError::SessionStore)?;
        Ok(())
    }

    /// Revoke every session of a user
    pub async fn logout_everywhere(&self, user_id: &str) -> Result<u64, AccountError> {
        let removed = self
            .sessions
            .delete_sessions_for_user(user_id)
            .await
            .map_err(AuthError::SessionStore)?;
        tracing::info!("Revoked {} sessions for user {}", removed, user_id);
        Ok(removed)
    }

    /// Resolve the user behind a token
    ///
    /// `None` when the token is invalid or the user no longer exists.
    pub async fn current_user(&self, token: &str) -> Result<Option<User>, AccountError> {
        let Some(user_id) = self.validator.validate(token).await? else {
            return Ok(None);
        };
        Ok(self.users.find_user_by_id(&user_id).await?)
    }

    /// Look up a user by ID
    pub async fn find_user(&self, user_id: &str) -> Result<Option<User>, AccountError> {
        Ok(self.users.find_user_by_id(user_id).await?)
    }

    async fn placeholder_hash(&self) -> Result<String, AuthError> {
        self.placeholder_hash
            .get_or_try_init(|| self.hash_password(PLACEHOLDER_PASSWORD.to_string()))
            .await
            .cloned()
    }

    async fn hash_password(&self, password: String) -> Result<String, AuthError> {
        let hasher = self.hasher;
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::hashing(format!("hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, AuthError> {
        let hasher = self.hasher;
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AuthError::hashing(format!("verification task failed: {}", e)))?
    }
}
