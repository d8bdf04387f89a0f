//! HTTP DTOs for review and comment endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{CommentView, ReviewView};

/// Review as it appears in responses.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub id: String,
    pub author: String,
    pub score: u8,
    pub text: String,
}

impl From<ReviewView> for ReviewResponse {
    fn from(view: ReviewView) -> Self {
        Self {
            id: view.id.to_string(),
            author: view.author,
            score: view.score,
            text: view.text,
        }
    }
}

/// Request to create a review.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReviewRequest {
    pub score: u8,
    pub text: String,
}

/// Partial review update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReviewRequest {
    #[serde(default)]
    pub score: Option<u8>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Comment as it appears in responses.
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub author: String,
    pub text: String,
}

impl From<CommentView> for CommentResponse {
    fn from(view: CommentView) -> Self {
        Self {
            id: view.id.to_string(),
            author: view.author,
            text: view.text,
        }
    }
}

/// Request to create a comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

/// Request to replace a comment's text.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCommentRequest {
    pub text: String,
}
