//! HTTP DTOs for the signup/token handshake.

use serde::{Deserialize, Serialize};

use crate::application::handlers::SignupOutcome;

/// Request to sign up or re-request a confirmation code.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
}

/// Signup echo. The confirmation code never appears here; it travels only
/// through the delivery channel.
#[derive(Debug, Clone, Serialize)]
pub struct SignupResponse {
    pub username: String,
    pub email: String,
}

impl From<SignupOutcome> for SignupResponse {
    fn from(outcome: SignupOutcome) -> Self {
        Self {
            username: outcome.username,
            email: outcome.email,
        }
    }
}

/// Request to exchange a confirmation code for a bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub confirmation_code: String,
}

/// Issued bearer token.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
