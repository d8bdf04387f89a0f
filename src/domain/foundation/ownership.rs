//! Authorship trait for author-owned resources.
//!
//! Reviews and comments carry an `author` back-reference to the identity
//! that wrote them. The owner exception in the authorizer is identity
//! equality on this field, never role.

use super::IdentityId;

/// Trait for resources that have a single author.
pub trait Authored {
    /// Returns the id of the identity that authored this resource.
    fn author_id(&self) -> IdentityId;

    /// Checks if the given identity is the author.
    fn is_author(&self, identity_id: IdentityId) -> bool {
        self.author_id() == identity_id
    }
}
