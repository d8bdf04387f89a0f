//! Confirmation codes for the passwordless signup handshake.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Single-purpose secret exchanged for a bearer token.
///
/// A code is regenerated on every signup call for an identity and stays
/// valid until the next regeneration replaces it. Codes are random
/// alphanumeric strings of configured length; uniqueness across identities
/// is not required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationCode(String);

impl ConfirmationCode {
    /// Generates a fresh random code of `length` alphanumeric characters.
    pub fn generate(length: usize) -> Self {
        let code: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect();
        Self(code)
    }

    /// Rebuilds a code from its stored representation.
    pub fn from_stored(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns true if `candidate` exactly matches this code.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    /// Returns the code text for delivery and persistence.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn generate_produces_requested_length() {
        for length in [6, 16, 64] {
            assert_eq!(ConfirmationCode::generate(length).as_str().len(), length);
        }
    }

    #[test]
    fn generate_produces_alphanumeric_only() {
        let code = ConfirmationCode::generate(128);
        assert!(code.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn consecutive_codes_differ() {
        // 16 alphanumeric characters make a collision vanishingly unlikely.
        let a = ConfirmationCode::generate(16);
        let b = ConfirmationCode::generate(16);
        assert_ne!(a, b);
    }

    #[test]
    fn matches_requires_exact_equality() {
        let code = ConfirmationCode::from_stored("Abc123");
        assert!(code.matches("Abc123"));
        assert!(!code.matches("abc123"));
        assert!(!code.matches("Abc123 "));
        assert!(!code.matches(""));
    }

    proptest! {
        #[test]
        fn stored_code_always_matches_itself(s in "[A-Za-z0-9]{1,64}") {
            let code = ConfirmationCode::from_stored(s.clone());
            prop_assert!(code.matches(&s));
        }
    }
}
