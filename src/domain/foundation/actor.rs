//! The acting party of a request.
//!
//! An `Actor` is either an authenticated identity or the anonymous actor.
//! A missing, malformed, or expired bearer token does not produce an error
//! at the authentication layer: it produces `Actor::Anonymous`, and the
//! authorizer treats anonymous as the lowest-privilege actor. Handlers
//! receive the actor explicitly as a parameter, never from ambient state.

use super::{IdentityId, Role};

/// An authenticated identity as seen by request handlers.
///
/// Built fresh for every request by the auth middleware, which re-loads the
/// identity record so role changes take effect immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The identity this actor acts as.
    pub id: IdentityId,

    /// Username, carried for logging and self-service views.
    pub username: String,

    /// Current role, loaded at request time.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    pub fn new(id: IdentityId, username: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            username: username.into(),
            role,
        }
    }
}

/// The party performing a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    /// No valid credential was presented.
    Anonymous,

    /// A validated identity.
    Known(AuthenticatedActor),
}

impl Actor {
    /// Returns the authenticated actor, if any.
    pub fn authenticated(&self) -> Option<&AuthenticatedActor> {
        match self {
            Actor::Anonymous => None,
            Actor::Known(actor) => Some(actor),
        }
    }

    /// Returns the acting identity id, if authenticated.
    pub fn identity_id(&self) -> Option<IdentityId> {
        self.authenticated().map(|a| a.id)
    }

    /// Returns the actor's role, if authenticated.
    pub fn role(&self) -> Option<Role> {
        self.authenticated().map(|a| a.role)
    }

    /// Returns true if no credential was presented.
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Actor::Anonymous)
    }
}

impl From<AuthenticatedActor> for Actor {
    fn from(actor: AuthenticatedActor) -> Self {
        Actor::Known(actor)
    }
}
