//! Review repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ReviewId, TitleId};
use crate::domain::review::{Review, Score};

/// Repository port for review persistence.
///
/// The store enforces the one-review-per-(author, title) invariant at
/// insertion time.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Inserts a new review.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the author already reviewed this title
    async fn create(&self, review: &Review) -> Result<(), DomainError>;

    /// Persists changes to an existing review.
    ///
    /// # Errors
    ///
    /// - `ReviewNotFound` if the review does not exist
    async fn update(&self, review: &Review) -> Result<(), DomainError>;

    /// Finds a review by id. Returns `None` if not found.
    async fn find_by_id(&self, id: ReviewId) -> Result<Option<Review>, DomainError>;

    /// Lists the reviews of a title.
    async fn list_by_title(&self, title_id: TitleId) -> Result<Vec<Review>, DomainError>;

    /// Returns the current score set of a title for rating aggregation.
    async fn scores_by_title(&self, title_id: TitleId) -> Result<Vec<Score>, DomainError>;

    /// Deletes a review.
    ///
    /// # Errors
    ///
    /// - `ReviewNotFound` if the review does not exist
    async fn delete(&self, id: ReviewId) -> Result<(), DomainError>;

    /// Deletes every review of a title (cascade from title deletion) and
    /// returns the deleted review ids so comment cascades can follow.
    async fn delete_by_title(&self, title_id: TitleId) -> Result<Vec<ReviewId>, DomainError>;
}
