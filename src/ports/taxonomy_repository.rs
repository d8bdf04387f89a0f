//! Category and genre repository ports.

use async_trait::async_trait;

use crate::domain::catalog::{Category, Genre, Slug};
use crate::domain::foundation::DomainError;

/// Repository port for category persistence.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Inserts a new category.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the slug is already taken
    async fn create(&self, category: &Category) -> Result<(), DomainError>;

    /// Finds a category by slug. Returns `None` if not found.
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Category>, DomainError>;

    /// Lists all categories ordered by slug.
    async fn list(&self) -> Result<Vec<Category>, DomainError>;

    /// Deletes a category by slug.
    ///
    /// # Errors
    ///
    /// - `CategoryNotFound` if no such category exists
    async fn delete(&self, slug: &Slug) -> Result<(), DomainError>;
}

/// Repository port for genre persistence.
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Inserts a new genre.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the slug is already taken
    async fn create(&self, genre: &Genre) -> Result<(), DomainError>;

    /// Finds a genre by slug. Returns `None` if not found.
    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Genre>, DomainError>;

    /// Lists all genres ordered by slug.
    async fn list(&self) -> Result<Vec<Genre>, DomainError>;

    /// Deletes a genre by slug.
    ///
    /// # Errors
    ///
    /// - `GenreNotFound` if no such genre exists
    async fn delete(&self, slug: &Slug) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_repositories_are_object_safe() {
        fn _accepts_categories(_repo: &dyn CategoryRepository) {}
        fn _accepts_genres(_repo: &dyn GenreRepository) {}
    }
}
