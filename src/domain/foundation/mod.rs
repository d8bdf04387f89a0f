//! Foundation types shared across the domain.
//!
//! Identifier newtypes, the role lattice, the request actor, authorship,
//! the centralized authorization decision function, and error types.

mod actor;
mod authorization;
mod errors;
mod ids;
mod ownership;
mod role;

pub use actor::{Actor, AuthenticatedActor};
pub use authorization::{authorize, Action, Decision, ResourceKind};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CommentId, IdentityId, ReviewId, TitleId};
pub use ownership::Authored;
pub use role::Role;
