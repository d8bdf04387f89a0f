//! The Review aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Authored, IdentityId, ReviewId, TitleId, ValidationError};

/// Review score on the 1..=10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "score",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Score::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

/// An authored review of a title.
///
/// At most one review exists per (author, title) pair; the store enforces
/// the constraint at insertion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    id: ReviewId,
    title_id: TitleId,
    author: IdentityId,
    score: Score,
    text: String,
}

impl Review {
    pub fn new(
        title_id: TitleId,
        author: IdentityId,
        score: Score,
        text: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        Ok(Self {
            id: ReviewId::new(),
            title_id,
            author,
            score,
            text,
        })
    }

    pub fn id(&self) -> ReviewId {
        self.id
    }

    pub fn title_id(&self) -> TitleId {
        self.title_id
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_score(&mut self, score: Score) {
        self.score = score;
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

impl Authored for Review {
    fn author_id(&self) -> IdentityId {
        self.author
    }
}
