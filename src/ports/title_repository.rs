//! Title repository port.

use async_trait::async_trait;

use crate::domain::catalog::Title;
use crate::domain::foundation::{DomainError, TitleId};

/// Repository port for title persistence.
#[async_trait]
pub trait TitleRepository: Send + Sync {
    /// Inserts a new title.
    async fn create(&self, title: &Title) -> Result<(), DomainError>;

    /// Persists changes to an existing title.
    ///
    /// # Errors
    ///
    /// - `TitleNotFound` if the title does not exist
    async fn update(&self, title: &Title) -> Result<(), DomainError>;

    /// Finds a title by id. Returns `None` if not found.
    async fn find_by_id(&self, id: TitleId) -> Result<Option<Title>, DomainError>;

    /// Lists all titles in insertion order; ordering by rating or name is
    /// applied by the caller over the derived rating view.
    async fn list(&self) -> Result<Vec<Title>, DomainError>;

    /// Deletes a title.
    ///
    /// # Errors
    ///
    /// - `TitleNotFound` if the title does not exist
    async fn delete(&self, id: TitleId) -> Result<(), DomainError>;
}
