//! Property-based tests
//!
//! Uses proptest to generate random inputs and verify properties of the
//! hasher, the session tokens and the form rules.

mod password_proptest;
mod token_proptest;
mod validation_proptest;
