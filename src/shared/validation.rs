/**
 * Account Form Validation
 *
 * Field rules for the login and registration forms. The same rules run on
 * the server before any account is created or any password is hashed, so a
 * client that skips its own checks gets the same messages back.
 */

use crate::shared::error::SharedError;

/// Minimum display name length, in characters, after trimming
pub const MIN_NAME_LEN: usize = 2;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate a display name
pub fn validate_name(name: &str) -> Result<(), SharedError> {
    if name.trim().chars().count() < MIN_NAME_LEN {
        return Err(SharedError::validation(
            "name",
            format!("Name must be at least {} characters", MIN_NAME_LEN),
        ));
    }
    Ok(())
}

/// Validate the shape of an e-mail address
///
/// This is a structural check only (`local@domain.tld`, no whitespace);
/// deliverability is never checked.
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    let invalid = || SharedError::validation("email", "Invalid email address");

    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() && !host.starts_with('.') => Ok(()),
        _ => Err(invalid()),
    }
}

/// Validate password length
pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
    Ok(())
}

/// Validate that the confirmation field repeats the password
pub fn validate_confirmation(password: &str, confirmation: &str) -> Result<(), SharedError> {
    if password != confirmation {
        return Err(SharedError::validation("confirm_password", "Passwords do not match"));
    }
    Ok(())
}

/// Normalize an e-mail address for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
