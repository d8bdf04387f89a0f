//! Token service port.

use crate::domain::foundation::{DomainError, IdentityId};
use crate::domain::identity::Identity;

/// Issues and verifies the opaque, time-bound bearer tokens handed out in
/// exchange for a valid confirmation code.
///
/// `verify` only proves possession of a token minted for an identity id;
/// the auth middleware re-loads the identity so the actor always carries
/// the *current* role. There is no refresh mechanism.
pub trait TokenService: Send + Sync {
    /// Mints a token bound to the identity's id with the configured lifetime.
    fn issue(&self, identity: &Identity) -> Result<String, DomainError>;

    /// Verifies signature and expiry, returning the bound identity id.
    /// Any failure (malformed, bad signature, expired) yields `None`.
    fn verify(&self, token: &str) -> Option<IdentityId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_service_is_object_safe() {
        fn _accepts_dyn(_service: &dyn TokenService) {}
    }
}
