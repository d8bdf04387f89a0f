//! HTTP routes for the signup/token handshake.

use axum::{routing::post, Router};

use super::handlers::{signup, token, AuthHandlers};

/// Creates the auth router with both handshake endpoints.
pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/token", post(token))
        .with_state(handlers)
}
