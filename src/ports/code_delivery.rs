//! Code delivery port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::identity::{ConfirmationCode, Identity};

/// Capability to deliver a confirmation code to an identity.
///
/// The transport (email, SMS) is outside the core; implementations only
/// promise to hand the code string to the identity's contact address.
/// Signup treats delivery as fire-and-forget: a failure is logged, not
/// surfaced to the client.
#[async_trait]
pub trait CodeDelivery: Send + Sync {
    /// Sends `code` to the identity's contact address.
    async fn send(&self, identity: &Identity, code: &ConfirmationCode) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_delivery_is_object_safe() {
        fn _accepts_dyn(_delivery: &dyn CodeDelivery) {}
    }
}
