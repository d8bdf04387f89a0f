//! Actor resolution middleware and extractor for axum.
//!
//! The middleware turns the `Authorization` header into an [`Actor`] and
//! injects it into the request extensions. Per the authentication contract,
//! a missing, malformed, or expired token is not an error: it yields
//! `Actor::Anonymous`, and authorization downstream treats anonymous as the
//! lowest-privilege actor. The identity record is re-loaded on every
//! request so role changes take effect immediately.
//!
//! ```text
//! Request → actor_middleware → injects Actor into extensions
//!                                      ↓
//!                              Handler → CurrentActor extractor reads it
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::domain::foundation::{Actor, AuthenticatedActor};
use crate::ports::{IdentityRepository, TokenService};

/// State for the actor middleware.
#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<dyn TokenService>,
    pub identities: Arc<dyn IdentityRepository>,
}

impl AuthState {
    pub fn new(tokens: Arc<dyn TokenService>, identities: Arc<dyn IdentityRepository>) -> Self {
        Self { tokens, identities }
    }

    /// Resolves the acting party from request headers.
    pub async fn resolve_actor(&self, headers: &HeaderMap) -> Actor {
        let Some(token) = bearer_token(headers) else {
            return Actor::Anonymous;
        };
        let Some(identity_id) = self.tokens.verify(token) else {
            return Actor::Anonymous;
        };
        // A verified token whose identity has since been deleted also
        // degrades to anonymous rather than an error.
        match self.identities.find_by_id(identity_id).await {
            Ok(Some(identity)) => Actor::Known(AuthenticatedActor::new(
                identity.id(),
                identity.username().as_str(),
                identity.role(),
            )),
            _ => Actor::Anonymous,
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Middleware that resolves the actor and stores it in request extensions.
pub async fn actor_middleware(
    State(state): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let actor = state.resolve_actor(request.headers()).await;
    request.extensions_mut().insert(actor);
    next.run(request).await
}

/// Extractor for the resolved actor.
///
/// Infallible: routes reached without the middleware see the anonymous
/// actor, which the authorizer denies anything privileged anyway.
#[derive(Debug, Clone)]
pub struct CurrentActor(pub Actor);

impl<S> axum::extract::FromRequestParts<S> for CurrentActor
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let actor = parts
                .extensions
                .get::<Actor>()
                .cloned()
                .unwrap_or(Actor::Anonymous);
            Ok(CurrentActor(actor))
        })
    }
}
