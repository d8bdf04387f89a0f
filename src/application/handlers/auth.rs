//! Signup and token-exchange handlers.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::identity::{Email, Identity, Username};
use crate::ports::{CodeDelivery, IdentityRepository, TokenService};

/// Command to sign up (or re-request a code for) an identity.
#[derive(Debug, Clone)]
pub struct SignupCommand {
    pub username: String,
    pub email: String,
}

/// Caller-facing signup outcome. The confirmation code is deliberately
/// absent: it travels only through the delivery channel.
#[derive(Debug, Clone)]
pub struct SignupOutcome {
    pub username: String,
    pub email: String,
}

/// Handler for the signup half of the handshake.
///
/// Find-or-create on the exact (username, email) pair, regenerate the
/// confirmation code, and hand it to the delivery channel. Signup is
/// idempotent on the pair: repeating it refreshes the code but never
/// creates a second identity.
pub struct SignupHandler {
    identities: Arc<dyn IdentityRepository>,
    delivery: Arc<dyn CodeDelivery>,
    code_length: usize,
}

impl SignupHandler {
    pub fn new(
        identities: Arc<dyn IdentityRepository>,
        delivery: Arc<dyn CodeDelivery>,
        code_length: usize,
    ) -> Self {
        Self {
            identities,
            delivery,
            code_length,
        }
    }

    pub async fn handle(&self, cmd: SignupCommand) -> Result<SignupOutcome, DomainError> {
        let username = Username::new(cmd.username)?;
        let email = Email::new(cmd.email)?;

        let mut identity = self.identities.find_or_create(username, email).await?;

        let code = identity.regenerate_code(self.code_length);
        self.identities.update(&identity).await?;

        // Delivery is fire-and-forget relative to the response: the code is
        // already persisted and a later signup can always mint a fresh one.
        if let Err(e) = self.delivery.send(&identity, &code).await {
            tracing::warn!(
                username = %identity.username(),
                error = %e,
                "confirmation code delivery failed"
            );
        }

        Ok(SignupOutcome {
            username: identity.username().as_str().to_string(),
            email: identity.email().as_str().to_string(),
        })
    }
}

/// Command to exchange a confirmation code for a bearer token.
#[derive(Debug, Clone)]
pub struct IssueTokenCommand {
    pub username: String,
    pub confirmation_code: String,
}

/// Handler for the token half of the handshake.
pub struct IssueTokenHandler {
    identities: Arc<dyn IdentityRepository>,
    tokens: Arc<dyn TokenService>,
}

impl IssueTokenHandler {
    pub fn new(identities: Arc<dyn IdentityRepository>, tokens: Arc<dyn TokenService>) -> Self {
        Self { identities, tokens }
    }

    pub async fn handle(&self, cmd: IssueTokenCommand) -> Result<String, DomainError> {
        let identity = self
            .identities
            .find_by_username(&cmd.username)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::UserNotFound, "User not found")
                    .with_detail("username", cmd.username.clone())
            })?;

        if !identity.code_matches(&cmd.confirmation_code) {
            return Err(DomainError::new(
                ErrorCode::InvalidConfirmationCode,
                "Confirmation code does not match",
            ));
        }

        self.tokens.issue(&identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::JwtTokenService;
    use crate::adapters::delivery::RecordingCodeDelivery;
    use crate::adapters::memory::InMemoryIdentityRepository;

    fn signup_handler(
        identities: Arc<InMemoryIdentityRepository>,
        delivery: Arc<RecordingCodeDelivery>,
    ) -> SignupHandler {
        SignupHandler::new(identities, delivery, 16)
    }

    fn signup_cmd(username: &str, email: &str) -> SignupCommand {
        SignupCommand {
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Signup
    // ════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn signup_creates_identity_and_delivers_code() {
        let identities = Arc::new(InMemoryIdentityRepository::new());
        let delivery = Arc::new(RecordingCodeDelivery::new());
        let handler = signup_handler(identities.clone(), delivery.clone());

        let outcome = handler.handle(signup_cmd("alice", "a@x.com")).await.unwrap();
        assert_eq!(outcome.username, "alice");
        assert_eq!(outcome.email, "a@x.com");

        let code = delivery.last_code_for("alice").unwrap();
        assert_eq!(code.len(), 16);

        let stored = identities.find_by_username("alice").await.unwrap().unwrap();
        assert!(stored.code_matches(&code));
    }

    #[tokio::test]
    async fn repeated_signup_regenerates_code_without_second_identity() {
        let identities = Arc::new(InMemoryIdentityRepository::new());
        let delivery = Arc::new(RecordingCodeDelivery::new());
        let handler = signup_handler(identities.clone(), delivery.clone());

        handler.handle(signup_cmd("alice", "a@x.com")).await.unwrap();
        let first = delivery.last_code_for("alice").unwrap();

        handler.handle(signup_cmd("alice", "a@x.com")).await.unwrap();
        let second = delivery.last_code_for("alice").unwrap();

        assert_ne!(first, second);
        assert_eq!(identities.list().await.unwrap().len(), 1);

        let stored = identities.find_by_username("alice").await.unwrap().unwrap();
        assert!(stored.code_matches(&second));
        assert!(!stored.code_matches(&first));
    }

    #[tokio::test]
    async fn signup_conflict_leaves_no_partial_identity() {
        let identities = Arc::new(InMemoryIdentityRepository::new());
        let delivery = Arc::new(RecordingCodeDelivery::new());
        let handler = signup_handler(identities.clone(), delivery.clone());

        handler.handle(signup_cmd("alice", "a@x.com")).await.unwrap();

        let err = handler
            .handle(signup_cmd("alice", "other@x.com"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);

        // No second record, no code delivered for the losing request.
        assert_eq!(identities.list().await.unwrap().len(), 1);
        assert_eq!(delivery.sent().len(), 1);
    }

    #[tokio::test]
    async fn signup_rejects_invalid_username() {
        let identities = Arc::new(InMemoryIdentityRepository::new());
        let delivery = Arc::new(RecordingCodeDelivery::new());
        let handler = signup_handler(identities.clone(), delivery);

        let err = handler
            .handle(signup_cmd("has space", "a@x.com"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(identities.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn signup_rejects_reserved_username() {
        let identities = Arc::new(InMemoryIdentityRepository::new());
        let delivery = Arc::new(RecordingCodeDelivery::new());
        let handler = signup_handler(identities, delivery);

        let err = handler.handle(signup_cmd("me", "a@x.com")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[tokio::test]
    async fn delivery_failure_does_not_fail_signup() {
        let identities = Arc::new(InMemoryIdentityRepository::new());
        let delivery = Arc::new(RecordingCodeDelivery::failing());
        let handler = SignupHandler::new(identities.clone(), delivery, 16);

        let outcome = handler.handle(signup_cmd("alice", "a@x.com")).await;
        assert!(outcome.is_ok());

        // The code was still persisted and can be re-requested.
        assert_eq!(identities.list().await.unwrap().len(), 1);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Token exchange
    // ════════════════════════════════════════════════════════════════════════

    async fn signed_up() -> (
        Arc<InMemoryIdentityRepository>,
        Arc<RecordingCodeDelivery>,
        String,
    ) {
        let identities = Arc::new(InMemoryIdentityRepository::new());
        let delivery = Arc::new(RecordingCodeDelivery::new());
        signup_handler(identities.clone(), delivery.clone())
            .handle(signup_cmd("alice", "a@x.com"))
            .await
            .unwrap();
        let code = delivery.last_code_for("alice").unwrap();
        (identities, delivery, code)
    }

    fn token_handler(identities: Arc<InMemoryIdentityRepository>) -> IssueTokenHandler {
        IssueTokenHandler::new(identities, Arc::new(JwtTokenService::new("secret", 3600)))
    }

    #[tokio::test]
    async fn valid_code_yields_token_bound_to_identity() {
        let (identities, _, code) = signed_up().await;
        let handler = token_handler(identities.clone());

        let token = handler
            .handle(IssueTokenCommand {
                username: "alice".to_string(),
                confirmation_code: code,
            })
            .await
            .unwrap();

        let service = JwtTokenService::new("secret", 3600);
        let bound = service.verify(&token).unwrap();
        let stored = identities.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(bound, stored.id());
    }

    #[tokio::test]
    async fn wrong_code_is_rejected() {
        let (identities, _, _) = signed_up().await;
        let handler = token_handler(identities);

        let err = handler
            .handle(IssueTokenCommand {
                username: "alice".to_string(),
                confirmation_code: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfirmationCode);
    }

    #[tokio::test]
    async fn unknown_username_is_not_found() {
        let identities = Arc::new(InMemoryIdentityRepository::new());
        let handler = token_handler(identities);

        let err = handler
            .handle(IssueTokenCommand {
                username: "nobody".to_string(),
                confirmation_code: "whatever".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UserNotFound);
    }

    #[tokio::test]
    async fn code_validation_is_side_effect_free() {
        // A failed attempt must not consume or rotate the stored code.
        let (identities, _, code) = signed_up().await;
        let handler = token_handler(identities);

        let _ = handler
            .handle(IssueTokenCommand {
                username: "alice".to_string(),
                confirmation_code: "wrong".to_string(),
            })
            .await;

        let token = handler
            .handle(IssueTokenCommand {
                username: "alice".to_string(),
                confirmation_code: code,
            })
            .await;
        assert!(token.is_ok());
    }
}
