//! Identity repository port.
//!
//! The store is the single source of truth for the (username, email)
//! uniqueness constraints; signup's find-or-create must be atomic with
//! respect to them, so the racing loser of two concurrent signups for the
//! same new username sees `Conflict`, never a duplicate record.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, IdentityId};
use crate::domain::identity::{Email, Identity, Username};

/// Repository port for identity persistence.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Looks up the exact (username, email) pair, creating a fresh identity
    /// if neither field is taken. Atomic with the uniqueness constraints.
    ///
    /// # Errors
    ///
    /// - `Conflict` if either field alone belongs to a *different* record;
    ///   no mutation happens in that case.
    async fn find_or_create(
        &self,
        username: Username,
        email: Email,
    ) -> Result<Identity, DomainError>;

    /// Inserts a new identity (account administration).
    ///
    /// # Errors
    ///
    /// - `Conflict` if the username or email is already taken.
    async fn create(&self, identity: &Identity) -> Result<(), DomainError>;

    /// Persists changes to an existing identity, re-checking uniqueness
    /// for changed username/email values.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the identity does not exist
    /// - `Conflict` if a changed field collides with another record
    async fn update(&self, identity: &Identity) -> Result<(), DomainError>;

    /// Finds an identity by its id. Returns `None` if not found.
    async fn find_by_id(&self, id: IdentityId) -> Result<Option<Identity>, DomainError>;

    /// Finds an identity by exact username. Returns `None` if not found.
    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, DomainError>;

    /// Lists all identities ordered by username.
    async fn list(&self) -> Result<Vec<Identity>, DomainError>;

    /// Deletes an identity by username.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if no such identity exists
    async fn delete(&self, username: &str) -> Result<(), DomainError>;
}
