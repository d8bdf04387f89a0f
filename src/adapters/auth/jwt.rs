//! JWT adapter for the token service port.
//!
//! Mints HS256 tokens bound to an identity id with a fixed configured
//! lifetime. Verification proves signature and expiry only; mapping the id
//! back to a live identity (and its current role) is the auth middleware's
//! job, so a token never pins a stale role.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, IdentityId};
use crate::domain::identity::Identity;
use crate::ports::TokenService;

/// Registered claims carried by issued tokens.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject - the identity id.
    sub: String,

    /// Expiry timestamp (Unix epoch seconds).
    exp: i64,

    /// Issued at timestamp.
    iat: i64,
}

/// HS256 token service with a shared signing secret.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: u64,
}

impl JwtTokenService {
    /// Creates a token service from the signing secret and token lifetime.
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, identity: &Identity) -> Result<String, DomainError> {
        let now = Utc::now();
        let claims = Claims {
            sub: identity.id().to_string(),
            exp: (now + Duration::seconds(self.ttl_secs as i64)).timestamp(),
            iat: now.timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, "Failed to sign token")
                .with_detail("cause", e.to_string())
        })
    }

    fn verify(&self, token: &str) -> Option<IdentityId> {
        let data = decode::<Claims>(token, &self.decoding_key, &Self::validation()).ok()?;
        data.claims.sub.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identity::{Email, Username};

    fn identity() -> Identity {
        Identity::new(
            Username::new("alice").unwrap(),
            Email::new("a@x.com").unwrap(),
        )
    }

    fn service() -> JwtTokenService {
        JwtTokenService::new("test-secret", 3600)
    }

    #[test]
    fn issued_token_verifies_to_identity_id() {
        let service = service();
        let identity = identity();

        let token = service.issue(&identity).unwrap();
        assert_eq!(service.verify(&token), Some(identity.id()));
    }

    #[test]
    fn garbage_token_fails_verification() {
        let service = service();
        assert_eq!(service.verify(""), None);
        assert_eq!(service.verify("not-a-jwt"), None);
        assert_eq!(service.verify("a.b.c"), None);
    }

    #[test]
    fn token_signed_with_other_secret_fails_verification() {
        let identity = identity();
        let other = JwtTokenService::new("different-secret", 3600);
        let token = other.issue(&identity).unwrap();

        assert_eq!(service().verify(&token), None);
    }

    #[test]
    fn expired_token_fails_verification() {
        let service = service();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: identity().id().to_string(),
            exp: now - 120,
            iat: now - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &service.encoding_key,
        )
        .unwrap();

        assert_eq!(service.verify(&token), None);
    }

    #[test]
    fn token_with_non_uuid_subject_fails_verification() {
        let service = service();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "not-an-id".to_string(),
            exp: now + 3600,
            iat: now,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &service.encoding_key,
        )
        .unwrap();

        assert_eq!(service.verify(&token), None);
    }
}
