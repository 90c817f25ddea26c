//! Property-based tests for form field validation
//!
//! Tests invariants:
//! - Surrounding whitespace never changes the outcome
//! - Strings without `@` are never emails
//! - Well-formed addresses are always accepted

use proptest::prelude::*;

use crate::core::validation::{is_valid_email, is_valid_phone};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_email() -> impl Strategy<Value = String> {
    ("[a-z0-9._+-]{1,20}", "[a-z0-9-]{1,15}", "[a-z]{2,6}")
        .prop_map(|(local, domain, tld)| format!("{}@{}.{}", local, domain, tld))
}

fn arb_padding() -> impl Strategy<Value = String> {
    "[ \t]{0,4}"
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Well-formed addresses are accepted
    #[test]
    fn prop_accepts_well_formed_email(email in arb_email()) {
        prop_assert!(is_valid_email(&email), "'{}' should be accepted", email);
    }

    /// Property: No `@`, no email
    #[test]
    fn prop_rejects_email_without_at(text in "[^@]{0,60}") {
        prop_assert!(!is_valid_email(&text));
    }

    /// Property: An accepted phone number is 7 to 20 characters, plus sign included
    #[test]
    fn prop_phone_length_bounded(text in "\\+?[0-9 ()-]{0,30}") {
        let len = text.trim().chars().count();
        if is_valid_phone(&text) {
            prop_assert!((7..=20).contains(&len), "'{}' accepted with {} chars", text, len);
        }
    }

    /// Property: Padding is ignored by the email and phone checks
    #[test]
    fn prop_padding_is_ignored(
        text in "[a-z0-9@.+() -]{0,30}",
        left in arb_padding(),
        right in arb_padding()
    ) {
        let padded = format!("{}{}{}", left, text, right);
        prop_assert_eq!(is_valid_email(&padded), is_valid_email(&text));
        prop_assert_eq!(is_valid_phone(&padded), is_valid_phone(text.trim()));
    }
}
