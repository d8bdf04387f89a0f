//! HTTP handlers for the signup/token handshake.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::{
    IssueTokenCommand, IssueTokenHandler, SignupCommand, SignupHandler,
};

use super::dto::{SignupRequest, SignupResponse, TokenRequest, TokenResponse};

#[derive(Clone)]
pub struct AuthHandlers {
    signup_handler: Arc<SignupHandler>,
    token_handler: Arc<IssueTokenHandler>,
}

impl AuthHandlers {
    pub fn new(signup_handler: Arc<SignupHandler>, token_handler: Arc<IssueTokenHandler>) -> Self {
        Self {
            signup_handler,
            token_handler,
        }
    }
}

/// POST /api/v1/auth/signup - Sign up, or refresh the code for an existing pair
pub async fn signup(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<SignupRequest>,
) -> Response {
    let cmd = SignupCommand {
        username: req.username,
        email: req.email,
    };

    match handlers.signup_handler.handle(cmd).await {
        Ok(outcome) => (StatusCode::OK, Json(SignupResponse::from(outcome))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/v1/auth/token - Exchange a confirmation code for a bearer token
pub async fn token(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<TokenRequest>,
) -> Response {
    let cmd = IssueTokenCommand {
        username: req.username,
        confirmation_code: req.confirmation_code,
    };

    match handlers.token_handler.handle(cmd).await {
        Ok(token) => (StatusCode::OK, Json(TokenResponse { token })).into_response(),
        Err(e) => domain_error_response(e),
    }
}
