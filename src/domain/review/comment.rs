//! The Comment aggregate.

use crate::domain::foundation::{Authored, CommentId, IdentityId, ReviewId, ValidationError};

/// An authored comment under a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    id: CommentId,
    review_id: ReviewId,
    author: IdentityId,
    text: String,
}

impl Comment {
    pub fn new(
        review_id: ReviewId,
        author: IdentityId,
        text: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        Ok(Self {
            id: CommentId::new(),
            review_id,
            author,
            text,
        })
    }

    pub fn id(&self) -> CommentId {
        self.id
    }

    pub fn review_id(&self) -> ReviewId {
        self.review_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        self.text = text;
        Ok(())
    }
}

impl Authored for Comment {
    fn author_id(&self) -> IdentityId {
        self.author
    }
}
