//! The Identity aggregate and its field value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{IdentityId, Role, ValidationError};

use super::ConfirmationCode;

const USERNAME_MAX_LEN: usize = 150;
const EMAIL_MAX_LEN: usize = 254;

/// Unique account name.
///
/// At most 150 characters drawn from letters, digits and `@ . + - _`.
/// The literal `me` is reserved for the self-service profile route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        if value.len() > USERNAME_MAX_LEN {
            return Err(ValidationError::invalid_format(
                "username",
                format!("longer than {} characters", USERNAME_MAX_LEN),
            ));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
        {
            return Err(ValidationError::invalid_format(
                "username",
                "only letters, digits and @ . + - _ are allowed",
            ));
        }
        if value == "me" {
            return Err(ValidationError::invalid_format(
                "username",
                "'me' is reserved",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Username::new(value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

/// Unique email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if value.len() > EMAIL_MAX_LEN {
            return Err(ValidationError::invalid_format(
                "email",
                format!("longer than {} characters", EMAIL_MAX_LEN),
            ));
        }
        let Some((local, domain)) = value.split_once('@') else {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        };
        if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.contains('@') {
            return Err(ValidationError::invalid_format(
                "email",
                "expected local@domain shape",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

/// An account record keyed by unique username and email.
///
/// Identities are passwordless: the only credential ever attached is the
/// confirmation code of the current signup round, and it never leaves the
/// store through a caller-facing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    id: IdentityId,
    username: Username,
    email: Email,
    role: Role,
    confirmation_code: Option<ConfirmationCode>,
}

impl Identity {
    /// Creates a new identity with the default `user` role and no code.
    pub fn new(username: Username, email: Email) -> Self {
        Self {
            id: IdentityId::new(),
            username,
            email,
            role: Role::User,
            confirmation_code: None,
        }
    }

    /// Creates an identity with an explicit role (admin account management).
    pub fn with_role(username: Username, email: Email, role: Role) -> Self {
        Self {
            role,
            ..Self::new(username, email)
        }
    }

    pub fn id(&self) -> IdentityId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Replaces the confirmation code with a freshly generated one and
    /// returns a copy for delivery. Any previously issued code stops
    /// matching from this point on.
    pub fn regenerate_code(&mut self, length: usize) -> ConfirmationCode {
        let code = ConfirmationCode::generate(length);
        self.confirmation_code = Some(code.clone());
        code
    }

    /// Returns true if `candidate` matches the currently stored code.
    /// Side-effect-free; identities without a stored code match nothing.
    pub fn code_matches(&self, candidate: &str) -> bool {
        self.confirmation_code
            .as_ref()
            .is_some_and(|code| code.matches(candidate))
    }

    pub fn set_username(&mut self, username: Username) {
        self.username = username;
    }

    pub fn set_email(&mut self, email: Email) {
        self.email = email;
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(name: &str, email: &str) -> Identity {
        Identity::new(Username::new(name).unwrap(), Email::new(email).unwrap())
    }

    // ════════════════════════════════════════════════════════════════════════
    // Username
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn username_accepts_allowed_characters() {
        for name in ["alice", "a.b-c_d+e@f", "User123"] {
            assert!(Username::new(name).is_ok(), "{} should be valid", name);
        }
    }

    #[test]
    fn username_rejects_empty() {
        assert!(matches!(
            Username::new(""),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn username_rejects_disallowed_characters() {
        for name in ["has space", "semi;colon", "emoji😀", "slash/"] {
            assert!(Username::new(name).is_err(), "{} should be rejected", name);
        }
    }

    #[test]
    fn username_rejects_reserved_me() {
        assert!(Username::new("me").is_err());
        // "me" only as the full name; prefixes are fine
        assert!(Username::new("melissa").is_ok());
    }

    #[test]
    fn username_rejects_over_150_chars() {
        let long = "a".repeat(151);
        assert!(Username::new(long).is_err());
        let max = "a".repeat(150);
        assert!(Username::new(max).is_ok());
    }

    #[test]
    fn username_deserializes_with_validation() {
        let ok: Result<Username, _> = serde_json::from_str("\"alice\"");
        assert!(ok.is_ok());
        let bad: Result<Username, _> = serde_json::from_str("\"has space\"");
        assert!(bad.is_err());
    }

    // ════════════════════════════════════════════════════════════════════════
    // Email
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn email_accepts_plain_addresses() {
        for addr in ["a@x.com", "first.last@sub.example.org"] {
            assert!(Email::new(addr).is_ok(), "{} should be valid", addr);
        }
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for addr in ["", "no-at-sign", "@x.com", "a@", "a@nodot", "a@b@c.com"] {
            assert!(Email::new(addr).is_err(), "{} should be rejected", addr);
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Identity
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn new_identity_has_user_role_and_no_code() {
        let identity = identity("alice", "a@x.com");
        assert_eq!(identity.role(), Role::User);
        assert!(!identity.code_matches(""));
        assert!(!identity.code_matches("anything"));
    }

    #[test]
    fn with_role_sets_explicit_role() {
        let identity = Identity::with_role(
            Username::new("mod").unwrap(),
            Email::new("m@x.com").unwrap(),
            Role::Moderator,
        );
        assert_eq!(identity.role(), Role::Moderator);
    }

    #[test]
    fn regenerate_code_invalidates_previous_code() {
        let mut identity = identity("alice", "a@x.com");
        let first = identity.regenerate_code(16);
        assert!(identity.code_matches(first.as_str()));

        let second = identity.regenerate_code(16);
        assert!(identity.code_matches(second.as_str()));
        assert!(!identity.code_matches(first.as_str()));
    }

    #[test]
    fn code_matches_is_side_effect_free() {
        let mut identity = identity("alice", "a@x.com");
        let code = identity.regenerate_code(16);
        // Repeated checks, right or wrong, leave the stored code in place.
        assert!(!identity.code_matches("wrong"));
        assert!(identity.code_matches(code.as_str()));
        assert!(identity.code_matches(code.as_str()));
    }
}
