//! In-memory catalog repositories (titles, categories, genres).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::catalog::{Category, Genre, Slug, Title};
use crate::domain::foundation::{DomainError, ErrorCode, TitleId};
use crate::ports::{CategoryRepository, GenreRepository, TitleRepository};

/// Mutex-guarded title store.
#[derive(Default)]
pub struct InMemoryTitleRepository {
    titles: Mutex<Vec<Title>>,
}

impl InMemoryTitleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TitleRepository for InMemoryTitleRepository {
    async fn create(&self, title: &Title) -> Result<(), DomainError> {
        self.titles.lock().unwrap().push(title.clone());
        Ok(())
    }

    async fn update(&self, title: &Title) -> Result<(), DomainError> {
        let mut titles = self.titles.lock().unwrap();
        let Some(pos) = titles.iter().position(|t| t.id() == title.id()) else {
            return Err(DomainError::new(ErrorCode::TitleNotFound, "Title not found"));
        };
        titles[pos] = title.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TitleId) -> Result<Option<Title>, DomainError> {
        Ok(self
            .titles
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Title>, DomainError> {
        Ok(self.titles.lock().unwrap().clone())
    }

    async fn delete(&self, id: TitleId) -> Result<(), DomainError> {
        let mut titles = self.titles.lock().unwrap();
        let Some(pos) = titles.iter().position(|t| t.id() == id) else {
            return Err(DomainError::new(ErrorCode::TitleNotFound, "Title not found"));
        };
        titles.remove(pos);
        Ok(())
    }
}

/// Mutex-guarded category store.
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Mutex<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, category: &Category) -> Result<(), DomainError> {
        let mut categories = self.categories.lock().unwrap();
        if categories.iter().any(|c| c.slug() == category.slug()) {
            return Err(DomainError::conflict(format!(
                "Category slug '{}' is already taken",
                category.slug()
            )));
        }
        categories.push(category.clone());
        Ok(())
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Category>, DomainError> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.slug() == slug)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Category>, DomainError> {
        let mut categories = self.categories.lock().unwrap().clone();
        categories.sort_by(|a, b| a.slug().as_str().cmp(b.slug().as_str()));
        Ok(categories)
    }

    async fn delete(&self, slug: &Slug) -> Result<(), DomainError> {
        let mut categories = self.categories.lock().unwrap();
        let Some(pos) = categories.iter().position(|c| c.slug() == slug) else {
            return Err(DomainError::new(
                ErrorCode::CategoryNotFound,
                "Category not found",
            ));
        };
        categories.remove(pos);
        Ok(())
    }
}

/// Mutex-guarded genre store.
#[derive(Default)]
pub struct InMemoryGenreRepository {
    genres: Mutex<Vec<Genre>>,
}

impl InMemoryGenreRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GenreRepository for InMemoryGenreRepository {
    async fn create(&self, genre: &Genre) -> Result<(), DomainError> {
        let mut genres = self.genres.lock().unwrap();
        if genres.iter().any(|g| g.slug() == genre.slug()) {
            return Err(DomainError::conflict(format!(
                "Genre slug '{}' is already taken",
                genre.slug()
            )));
        }
        genres.push(genre.clone());
        Ok(())
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Genre>, DomainError> {
        Ok(self
            .genres
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.slug() == slug)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Genre>, DomainError> {
        let mut genres = self.genres.lock().unwrap().clone();
        genres.sort_by(|a, b| a.slug().as_str().cmp(b.slug().as_str()));
        Ok(genres)
    }

    async fn delete(&self, slug: &Slug) -> Result<(), DomainError> {
        let mut genres = self.genres.lock().unwrap();
        let Some(pos) = genres.iter().position(|g| g.slug() == slug) else {
            return Err(DomainError::new(ErrorCode::GenreNotFound, "Genre not found"));
        };
        genres.remove(pos);
        Ok(())
    }
}
