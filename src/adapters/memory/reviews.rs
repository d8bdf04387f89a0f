//! In-memory review and comment repositories.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{Authored, CommentId, DomainError, ErrorCode, ReviewId, TitleId};
use crate::domain::review::{Comment, Review, Score};
use crate::ports::{CommentRepository, ReviewRepository};

/// Mutex-guarded review store enforcing one review per (author, title).
#[derive(Default)]
pub struct InMemoryReviewRepository {
    reviews: Mutex<Vec<Review>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn create(&self, review: &Review) -> Result<(), DomainError> {
        let mut reviews = self.reviews.lock().unwrap();
        if reviews
            .iter()
            .any(|r| r.title_id() == review.title_id() && r.author_id() == review.author_id())
        {
            return Err(DomainError::conflict(
                "Author already reviewed this title",
            ));
        }
        reviews.push(review.clone());
        Ok(())
    }

    async fn update(&self, review: &Review) -> Result<(), DomainError> {
        let mut reviews = self.reviews.lock().unwrap();
        let Some(pos) = reviews.iter().position(|r| r.id() == review.id()) else {
            return Err(DomainError::new(
                ErrorCode::ReviewNotFound,
                "Review not found",
            ));
        };
        reviews[pos] = review.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: ReviewId) -> Result<Option<Review>, DomainError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == id)
            .cloned())
    }

    async fn list_by_title(&self, title_id: TitleId) -> Result<Vec<Review>, DomainError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.title_id() == title_id)
            .cloned()
            .collect())
    }

    async fn scores_by_title(&self, title_id: TitleId) -> Result<Vec<Score>, DomainError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.title_id() == title_id)
            .map(|r| r.score())
            .collect())
    }

    async fn delete(&self, id: ReviewId) -> Result<(), DomainError> {
        let mut reviews = self.reviews.lock().unwrap();
        let Some(pos) = reviews.iter().position(|r| r.id() == id) else {
            return Err(DomainError::new(
                ErrorCode::ReviewNotFound,
                "Review not found",
            ));
        };
        reviews.remove(pos);
        Ok(())
    }

    async fn delete_by_title(&self, title_id: TitleId) -> Result<Vec<ReviewId>, DomainError> {
        let mut reviews = self.reviews.lock().unwrap();
        let deleted: Vec<ReviewId> = reviews
            .iter()
            .filter(|r| r.title_id() == title_id)
            .map(|r| r.id())
            .collect();
        reviews.retain(|r| r.title_id() != title_id);
        Ok(deleted)
    }
}

/// Mutex-guarded comment store.
#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: Mutex<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, comment: &Comment) -> Result<(), DomainError> {
        self.comments.lock().unwrap().push(comment.clone());
        Ok(())
    }

    async fn update(&self, comment: &Comment) -> Result<(), DomainError> {
        let mut comments = self.comments.lock().unwrap();
        let Some(pos) = comments.iter().position(|c| c.id() == comment.id()) else {
            return Err(DomainError::new(
                ErrorCode::CommentNotFound,
                "Comment not found",
            ));
        };
        comments[pos] = comment.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, DomainError> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id() == id)
            .cloned())
    }

    async fn list_by_review(&self, review_id: ReviewId) -> Result<Vec<Comment>, DomainError> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.review_id() == review_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: CommentId) -> Result<(), DomainError> {
        let mut comments = self.comments.lock().unwrap();
        let Some(pos) = comments.iter().position(|c| c.id() == id) else {
            return Err(DomainError::new(
                ErrorCode::CommentNotFound,
                "Comment not found",
            ));
        };
        comments.remove(pos);
        Ok(())
    }

    async fn delete_by_review(&self, review_id: ReviewId) -> Result<(), DomainError> {
        self.comments
            .lock()
            .unwrap()
            .retain(|c| c.review_id() != review_id);
        Ok(())
    }
}
