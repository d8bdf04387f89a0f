//! Nested-path resource resolution.
//!
//! Nested routes name their parents by id (`/titles/{tid}/reviews/{rid}/...`).
//! The resolver fetches each level in order and fails at the first missing
//! one with an error naming that level; later segments are never attempted.
//! The resolved chain feeds both the authorizer (ownership lookup) and the
//! mutation (foreign-key binding).

use std::sync::Arc;

use crate::domain::catalog::Title;
use crate::domain::foundation::{DomainError, ErrorCode, ReviewId, TitleId};
use crate::domain::review::Review;
use crate::ports::{ReviewRepository, TitleRepository};

/// The concrete parent resources identified by a nested path.
#[derive(Debug, Clone)]
pub struct ResolvedChain {
    pub title: Title,
    pub review: Option<Review>,
}

/// Resolves nested path segments into parent resources.
pub struct ResourceResolver {
    titles: Arc<dyn TitleRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl ResourceResolver {
    pub fn new(titles: Arc<dyn TitleRepository>, reviews: Arc<dyn ReviewRepository>) -> Self {
        Self { titles, reviews }
    }

    /// Resolves a single-level path: the title.
    pub async fn resolve_title(&self, title_id: TitleId) -> Result<ResolvedChain, DomainError> {
        let title = self
            .titles
            .find_by_id(title_id)
            .await?
            .ok_or_else(|| title_not_found(title_id))?;
        Ok(ResolvedChain {
            title,
            review: None,
        })
    }

    /// Resolves a two-level path: the title, then the review under it.
    ///
    /// A review id that exists under a *different* title is still a review
    /// not-found here; reviews are only addressable through their owner.
    pub async fn resolve_review(
        &self,
        title_id: TitleId,
        review_id: ReviewId,
    ) -> Result<ResolvedChain, DomainError> {
        let mut chain = self.resolve_title(title_id).await?;
        let review = self
            .reviews
            .find_by_id(review_id)
            .await?
            .filter(|review| review.title_id() == title_id)
            .ok_or_else(|| review_not_found(review_id))?;
        chain.review = Some(review);
        Ok(chain)
    }
}

fn title_not_found(id: TitleId) -> DomainError {
    DomainError::new(ErrorCode::TitleNotFound, "Title not found")
        .with_detail("title_id", id.to_string())
}

fn review_not_found(id: ReviewId) -> DomainError {
    DomainError::new(ErrorCode::ReviewNotFound, "Review not found")
        .with_detail("review_id", id.to_string())
}
