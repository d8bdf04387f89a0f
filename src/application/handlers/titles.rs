//! Title handlers: admin-gated writes and rating-bearing reads.

use std::sync::Arc;

use chrono::{Datelike, Utc};

use crate::domain::catalog::{mean_rating, rating_ordering, Category, Genre, Rating, Slug, Title};
use crate::domain::foundation::{
    authorize, Action, Actor, DomainError, ErrorCode, ResourceKind, TitleId,
};
use crate::ports::{
    CategoryRepository, CommentRepository, GenreRepository, ReviewRepository, TitleRepository,
};

/// Read model for a title, carrying the derived rating and the expanded
/// taxonomy records.
#[derive(Debug, Clone)]
pub struct TitleView {
    pub id: TitleId,
    pub name: String,
    pub year: i32,
    pub rating: Option<Rating>,
    pub category: Option<Category>,
    pub genres: Vec<Genre>,
}

/// Ordering criteria for title listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleOrdering {
    #[default]
    Name,
    Rating,
}

#[derive(Debug, Clone)]
pub struct CreateTitleCommand {
    pub name: String,
    pub year: i32,
    pub category: Option<String>,
    pub genres: Vec<String>,
}

/// Partial title update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateTitleCommand {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub category: Option<String>,
    pub genres: Option<Vec<String>>,
}

/// Handlers for the title collection.
pub struct TitleHandler {
    titles: Arc<dyn TitleRepository>,
    categories: Arc<dyn CategoryRepository>,
    genres: Arc<dyn GenreRepository>,
    reviews: Arc<dyn ReviewRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl TitleHandler {
    pub fn new(
        titles: Arc<dyn TitleRepository>,
        categories: Arc<dyn CategoryRepository>,
        genres: Arc<dyn GenreRepository>,
        reviews: Arc<dyn ReviewRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            titles,
            categories,
            genres,
            reviews,
            comments,
        }
    }

    pub async fn create(
        &self,
        actor: &Actor,
        cmd: CreateTitleCommand,
    ) -> Result<TitleView, DomainError> {
        authorize(actor, Action::Create, ResourceKind::Title, None).into_result()?;

        validate_year(cmd.year)?;
        let category = self.resolve_category(cmd.category).await?;
        let genres = self.resolve_genres(cmd.genres).await?;

        let title = Title::new(
            cmd.name,
            cmd.year,
            category.clone().map(|c| c.slug().clone()),
            genres.iter().map(|g| g.slug().clone()).collect(),
        )?;
        self.titles.create(&title).await?;

        Ok(TitleView {
            id: title.id(),
            name: title.name().to_string(),
            year: title.year(),
            rating: None,
            category,
            genres,
        })
    }

    pub async fn update(
        &self,
        actor: &Actor,
        id: TitleId,
        cmd: UpdateTitleCommand,
    ) -> Result<TitleView, DomainError> {
        authorize(actor, Action::Update, ResourceKind::Title, None).into_result()?;

        let mut title = self.load(id).await?;

        if let Some(name) = cmd.name {
            title.rename(name)?;
        }
        if let Some(year) = cmd.year {
            validate_year(year)?;
            title.set_year(year);
        }
        if let Some(category) = cmd.category {
            let category = self.resolve_category(Some(category)).await?;
            title.set_category(category.map(|c| c.slug().clone()));
        }
        if let Some(genres) = cmd.genres {
            let genres = self.resolve_genres(genres).await?;
            title.set_genres(genres.into_iter().map(|g| g.slug().clone()).collect());
        }

        self.titles.update(&title).await?;
        self.view(title).await
    }

    /// Deletes a title and cascades through its reviews and their comments.
    pub async fn delete(&self, actor: &Actor, id: TitleId) -> Result<(), DomainError> {
        authorize(actor, Action::Delete, ResourceKind::Title, None).into_result()?;

        self.titles.delete(id).await?;
        let deleted_reviews = self.reviews.delete_by_title(id).await?;
        for review_id in deleted_reviews {
            self.comments.delete_by_review(review_id).await?;
        }
        Ok(())
    }

    pub async fn get(&self, actor: &Actor, id: TitleId) -> Result<TitleView, DomainError> {
        authorize(actor, Action::Read, ResourceKind::Title, None).into_result()?;
        let title = self.load(id).await?;
        self.view(title).await
    }

    /// Lists all titles with their current ratings, ordered by `ordering`
    /// with (name, id) as the stable tie-break.
    pub async fn list(
        &self,
        actor: &Actor,
        ordering: TitleOrdering,
    ) -> Result<Vec<TitleView>, DomainError> {
        authorize(actor, Action::Read, ResourceKind::Title, None).into_result()?;

        let mut views = Vec::new();
        for title in self.titles.list().await? {
            views.push(self.view(title).await?);
        }

        match ordering {
            TitleOrdering::Name => {
                views.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
            }
            TitleOrdering::Rating => {
                views.sort_by(|a, b| {
                    rating_ordering(a.rating, b.rating)
                        .then_with(|| a.name.cmp(&b.name))
                        .then_with(|| a.id.cmp(&b.id))
                });
            }
        }
        Ok(views)
    }

    async fn load(&self, id: TitleId) -> Result<Title, DomainError> {
        self.titles.find_by_id(id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::TitleNotFound, "Title not found")
                .with_detail("title_id", id.to_string())
        })
    }

    /// Builds the read model, recomputing the rating from the current
    /// review set.
    async fn view(&self, title: Title) -> Result<TitleView, DomainError> {
        let scores = self.reviews.scores_by_title(title.id()).await?;
        let rating = mean_rating(&scores);

        let category = match title.category() {
            Some(slug) => self.categories.find_by_slug(slug).await?,
            None => None,
        };
        let mut genres = Vec::new();
        for slug in title.genres() {
            if let Some(genre) = self.genres.find_by_slug(slug).await? {
                genres.push(genre);
            }
        }

        Ok(TitleView {
            id: title.id(),
            name: title.name().to_string(),
            year: title.year(),
            rating,
            category,
            genres,
        })
    }

    async fn resolve_category(
        &self,
        slug: Option<String>,
    ) -> Result<Option<Category>, DomainError> {
        let Some(slug) = slug else { return Ok(None) };
        let slug = Slug::new(slug)?;
        let category = self.categories.find_by_slug(&slug).await?.ok_or_else(|| {
            DomainError::validation("category", format!("unknown category '{}'", slug))
        })?;
        Ok(Some(category))
    }

    async fn resolve_genres(&self, slugs: Vec<String>) -> Result<Vec<Genre>, DomainError> {
        let mut genres = Vec::new();
        for slug in slugs {
            let slug = Slug::new(slug)?;
            let genre = self
                .genres
                .find_by_slug(&slug)
                .await?
                .ok_or_else(|| {
                    DomainError::validation("genre", format!("unknown genre '{}'", slug))
                })?;
            genres.push(genre);
        }
        Ok(genres)
    }
}

fn validate_year(year: i32) -> Result<(), DomainError> {
    let current = Utc::now().year();
    if year > current {
        return Err(DomainError::validation(
            "year",
            format!("year {} is in the future", year),
        ));
    }
    Ok(())
}
