//! Property-based tests for session tokens
//!
//! Issuance and validation are async, so each case runs on a
//! current-thread runtime over a fresh in-memory store.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use shellkit::backend::auth::issuer::SessionIssuer;
use shellkit::backend::auth::sessions::SessionKeys;
use shellkit::backend::auth::store::{MemoryStore, SessionStore};
use shellkit::backend::auth::validator::{Rejection, SessionValidator, TokenStatus};

use crate::common::TEST_SECRET;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn pair() -> (SessionIssuer, SessionValidator) {
    let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::new());
    let keys = Arc::new(SessionKeys::from_secret(TEST_SECRET.as_bytes()));
    (
        SessionIssuer::new(keys.clone(), store.clone()),
        SessionValidator::new(keys, store),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_validate_returns_issued_user(user_id in "[A-Za-z0-9_-]{1,40}") {
        let (issuer, validator) = pair();
        let validated = runtime().block_on(async {
            let token = issuer.issue(&user_id).await.unwrap();
            validator.validate(&token).await.unwrap()
        });
        prop_assert_eq!(validated, Some(user_id));
    }

    #[test]
    fn test_valid_until_exactly_seven_days(
        issued_secs in 1_600_000_000i64..2_000_000_000i64,
        offset_secs in 0i64..(7 * 24 * 60 * 60),
    ) {
        let (issuer, validator) = pair();
        let issued = Utc.timestamp_opt(issued_secs, 0).unwrap();

        let (inside, at_expiry) = runtime().block_on(async {
            let token = issuer.issue_at("u1", issued).await.unwrap();
            let inside = validator.check_at(&token, issued + Duration::seconds(offset_secs)).await.unwrap();
            let at_expiry = validator.check_at(&token, issued + Duration::days(7)).await.unwrap();
            (inside, at_expiry)
        });

        prop_assert_eq!(inside, TokenStatus::Valid { user_id: "u1".to_string() });
        prop_assert_eq!(at_expiry, TokenStatus::Invalid(Rejection::Expired));
    }

    #[test]
    fn test_arbitrary_strings_are_rejected_without_error(token in "\\PC{0,200}") {
        let (_, validator) = pair();
        let result = runtime().block_on(validator.validate(&token));
        prop_assert_eq!(result.unwrap(), None);
    }
}
