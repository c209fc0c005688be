//! Property-based tests for the credential hasher
//!
//! bcrypt is slow by design, so these run few cases at the minimum cost.

use proptest::prelude::*;
use shellkit::backend::auth::passwords::PasswordHasher;
use shellkit::shared::config::MIN_HASH_COST;

fn hasher() -> PasswordHasher {
    PasswordHasher::new(MIN_HASH_COST)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn test_hash_verifies_own_password(password in "[ -~]{1,48}") {
        let hash = hasher().hash(&password).unwrap();
        prop_assert!(hasher().verify(&password, &hash).unwrap());
    }

    #[test]
    fn test_other_password_rejected(p1 in "[ -~]{1,32}", p2 in "[ -~]{1,32}") {
        prop_assume!(p1 != p2);
        let hash = hasher().hash(&p2).unwrap();
        prop_assert!(!hasher().verify(&p1, &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted(password in "[ -~]{1,32}") {
        let first = hasher().hash(&password).unwrap();
        let second = hasher().hash(&password).unwrap();
        prop_assert_ne!(&first, &second);
        prop_assert!(hasher().verify(&password, &second).unwrap());
    }

    #[test]
    fn test_hash_never_contains_password(password in "[a-z]{8,24}") {
        let hash = hasher().hash(&password).unwrap();
        prop_assert!(!hash.contains(&password));
    }
}
