//! Category and genre handlers: world-readable, admin-writable.

use std::sync::Arc;

use crate::domain::catalog::{Category, Genre, Slug};
use crate::domain::foundation::{authorize, Action, Actor, DomainError, ResourceKind};
use crate::ports::{CategoryRepository, GenreRepository};

#[derive(Debug, Clone)]
pub struct CreateTaxonomyCommand {
    pub name: String,
    pub slug: String,
}

/// Handlers for the category collection.
pub struct CategoryHandler {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryHandler {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn list(&self, actor: &Actor) -> Result<Vec<Category>, DomainError> {
        authorize(actor, Action::Read, ResourceKind::Category, None).into_result()?;
        self.categories.list().await
    }

    pub async fn create(
        &self,
        actor: &Actor,
        cmd: CreateTaxonomyCommand,
    ) -> Result<Category, DomainError> {
        authorize(actor, Action::Create, ResourceKind::Category, None).into_result()?;
        let category = Category::new(cmd.name, Slug::new(cmd.slug)?)?;
        self.categories.create(&category).await?;
        Ok(category)
    }

    pub async fn delete(&self, actor: &Actor, slug: &str) -> Result<(), DomainError> {
        authorize(actor, Action::Delete, ResourceKind::Category, None).into_result()?;
        self.categories.delete(&Slug::new(slug)?).await
    }
}

/// Handlers for the genre collection.
pub struct GenreHandler {
    genres: Arc<dyn GenreRepository>,
}

impl GenreHandler {
    pub fn new(genres: Arc<dyn GenreRepository>) -> Self {
        Self { genres }
    }

    pub async fn list(&self, actor: &Actor) -> Result<Vec<Genre>, DomainError> {
        authorize(actor, Action::Read, ResourceKind::Genre, None).into_result()?;
        self.genres.list().await
    }

    pub async fn create(
        &self,
        actor: &Actor,
        cmd: CreateTaxonomyCommand,
    ) -> Result<Genre, DomainError> {
        authorize(actor, Action::Create, ResourceKind::Genre, None).into_result()?;
        let genre = Genre::new(cmd.name, Slug::new(cmd.slug)?)?;
        self.genres.create(&genre).await?;
        Ok(genre)
    }

    pub async fn delete(&self, actor: &Actor, slug: &str) -> Result<(), DomainError> {
        authorize(actor, Action::Delete, ResourceKind::Genre, None).into_result()?;
        self.genres.delete(&Slug::new(slug)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCategoryRepository, InMemoryGenreRepository};
    use crate::domain::foundation::{AuthenticatedActor, ErrorCode, IdentityId, Role};

    fn admin() -> Actor {
        Actor::Known(AuthenticatedActor::new(IdentityId::new(), "root", Role::Admin))
    }

    fn moderator() -> Actor {
        Actor::Known(AuthenticatedActor::new(IdentityId::new(), "mod", Role::Moderator))
    }

    fn cmd(name: &str, slug: &str) -> CreateTaxonomyCommand {
        CreateTaxonomyCommand {
            name: name.to_string(),
            slug: slug.to_string(),
        }
    }

    #[tokio::test]
    async fn admin_creates_and_deletes_categories() {
        let handler = CategoryHandler::new(Arc::new(InMemoryCategoryRepository::new()));

        handler.create(&admin(), cmd("Movies", "movies")).await.unwrap();
        assert_eq!(handler.list(&Actor::Anonymous).await.unwrap().len(), 1);

        handler.delete(&admin(), "movies").await.unwrap();
        assert!(handler.list(&Actor::Anonymous).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn moderator_cannot_write_taxonomy() {
        let handler = GenreHandler::new(Arc::new(InMemoryGenreRepository::new()));

        let err = handler
            .create(&moderator(), cmd("Jazz", "jazz"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn anonymous_reads_but_cannot_write() {
        let handler = GenreHandler::new(Arc::new(InMemoryGenreRepository::new()));

        assert!(handler.list(&Actor::Anonymous).await.is_ok());
        let err = handler
            .create(&Actor::Anonymous, cmd("Jazz", "jazz"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[tokio::test]
    async fn duplicate_slug_conflicts() {
        let handler = CategoryHandler::new(Arc::new(InMemoryCategoryRepository::new()));
        handler.create(&admin(), cmd("Movies", "movies")).await.unwrap();

        let err = handler
            .create(&admin(), cmd("Films", "movies"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);
    }

    #[tokio::test]
    async fn invalid_slug_fails_validation() {
        let handler = CategoryHandler::new(Arc::new(InMemoryCategoryRepository::new()));
        let err = handler
            .create(&admin(), cmd("Movies", "Not A Slug"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}
