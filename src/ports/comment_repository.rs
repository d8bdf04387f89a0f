//! Comment repository port.

use async_trait::async_trait;

use crate::domain::foundation::{CommentId, DomainError, ReviewId};
use crate::domain::review::Comment;

/// Repository port for comment persistence.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Inserts a new comment.
    async fn create(&self, comment: &Comment) -> Result<(), DomainError>;

    /// Persists changes to an existing comment.
    ///
    /// # Errors
    ///
    /// - `CommentNotFound` if the comment does not exist
    async fn update(&self, comment: &Comment) -> Result<(), DomainError>;

    /// Finds a comment by id. Returns `None` if not found.
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, DomainError>;

    /// Lists the comments under a review.
    async fn list_by_review(&self, review_id: ReviewId) -> Result<Vec<Comment>, DomainError>;

    /// Deletes a comment.
    ///
    /// # Errors
    ///
    /// - `CommentNotFound` if the comment does not exist
    async fn delete(&self, id: CommentId) -> Result<(), DomainError>;

    /// Deletes every comment under a review (cascade from review deletion).
    async fn delete_by_review(&self, review_id: ReviewId) -> Result<(), DomainError>;
}
