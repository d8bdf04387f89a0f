//! In-memory identity repository.
//!
//! One mutex guards the whole store, so find-or-create is atomic with the
//! uniqueness constraints: of two racing signups for the same new username,
//! exactly one creates the record and the other observes it (or a conflict),
//! never a duplicate.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, IdentityId};
use crate::domain::identity::{Email, Identity, Username};
use crate::ports::IdentityRepository;

/// Mutex-guarded identity store.
#[derive(Default)]
pub struct InMemoryIdentityRepository {
    identities: Mutex<Vec<Identity>>,
}

impl InMemoryIdentityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn conflict() -> DomainError {
        DomainError::conflict("Username or email is already taken")
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn find_or_create(
        &self,
        username: Username,
        email: Email,
    ) -> Result<Identity, DomainError> {
        let mut identities = self.identities.lock().unwrap();

        if let Some(existing) = identities
            .iter()
            .find(|i| i.username() == &username && i.email() == &email)
        {
            return Ok(existing.clone());
        }
        if identities
            .iter()
            .any(|i| i.username() == &username || i.email() == &email)
        {
            return Err(Self::conflict());
        }

        let identity = Identity::new(username, email);
        identities.push(identity.clone());
        Ok(identity)
    }

    async fn create(&self, identity: &Identity) -> Result<(), DomainError> {
        let mut identities = self.identities.lock().unwrap();
        if identities
            .iter()
            .any(|i| i.username() == identity.username() || i.email() == identity.email())
        {
            return Err(Self::conflict());
        }
        identities.push(identity.clone());
        Ok(())
    }

    async fn update(&self, identity: &Identity) -> Result<(), DomainError> {
        let mut identities = self.identities.lock().unwrap();
        if identities.iter().any(|i| {
            i.id() != identity.id()
                && (i.username() == identity.username() || i.email() == identity.email())
        }) {
            return Err(Self::conflict());
        }
        let Some(pos) = identities.iter().position(|i| i.id() == identity.id()) else {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        };
        identities[pos] = identity.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: IdentityId) -> Result<Option<Identity>, DomainError> {
        Ok(self
            .identities
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id() == id)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>, DomainError> {
        Ok(self
            .identities
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.username().as_str() == username)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Identity>, DomainError> {
        let mut identities = self.identities.lock().unwrap().clone();
        identities.sort_by(|a, b| a.username().as_str().cmp(b.username().as_str()));
        Ok(identities)
    }

    async fn delete(&self, username: &str) -> Result<(), DomainError> {
        let mut identities = self.identities.lock().unwrap();
        let Some(pos) = identities
            .iter()
            .position(|i| i.username().as_str() == username)
        else {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        };
        identities.remove(pos);
        Ok(())
    }
}
