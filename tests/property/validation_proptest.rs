//! Property-based tests for the account form rules

use proptest::prelude::*;
use shellkit::shared::validation::{
    normalize_email, validate_email, validate_name, validate_password, MIN_PASSWORD_LEN,
};

proptest! {
    #[test]
    fn test_password_length_threshold(password in "\\PC{0,32}") {
        let long_enough = password.chars().count() >= MIN_PASSWORD_LEN;
        prop_assert_eq!(validate_password(&password).is_ok(), long_enough);
    }

    #[test]
    fn test_generated_emails_accepted(
        local in "[a-z0-9._%+-]{1,16}",
        host in "[a-z0-9-]{1,16}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{}@{}.{}", local, host, tld);
        prop_assert!(validate_email(&email).is_ok(), "rejected {}", email);
    }

    #[test]
    fn test_strings_without_at_rejected(email in "[^@]{0,32}") {
        prop_assert!(validate_email(&email).is_err());
    }

    #[test]
    fn test_normalize_is_idempotent(email in "[ -~]{0,40}") {
        let once = normalize_email(&email);
        prop_assert_eq!(normalize_email(&once), once.clone());
    }

    #[test]
    fn test_names_of_two_letters_accepted(name in "[A-Za-z]{2,30}") {
        prop_assert!(validate_name(&name).is_ok());
    }
}
