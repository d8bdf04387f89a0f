//! HTTP handlers for the nested review and comment endpoints.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::adapters::http::middleware::CurrentActor;
use crate::application::handlers::{
    CommentHandler, CreateCommentCommand, CreateReviewCommand, ReviewHandler,
    UpdateCommentCommand, UpdateReviewCommand,
};
use crate::domain::foundation::{CommentId, ReviewId, TitleId};

use super::dto::{
    CommentResponse, CreateCommentRequest, CreateReviewRequest, ReviewResponse,
    UpdateCommentRequest, UpdateReviewRequest,
};

#[derive(Clone)]
pub struct ReviewHandlers {
    review_handler: Arc<ReviewHandler>,
    comment_handler: Arc<CommentHandler>,
}

impl ReviewHandlers {
    pub fn new(review_handler: Arc<ReviewHandler>, comment_handler: Arc<CommentHandler>) -> Self {
        Self {
            review_handler,
            comment_handler,
        }
    }
}

fn parse_id<T: FromStr>(raw: &str, what: &str) -> Result<T, Response> {
    raw.parse::<T>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!("Invalid {} ID", what))),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Reviews
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/v1/titles/:title_id/reviews - List a title's reviews
pub async fn list_reviews(
    State(handlers): State<ReviewHandlers>,
    CurrentActor(actor): CurrentActor,
    Path(title_id): Path<String>,
) -> Response {
    let title_id: TitleId = match parse_id(&title_id, "title") {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.review_handler.list(&actor, title_id).await {
        Ok(views) => {
            let reviews: Vec<ReviewResponse> = views.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(reviews)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/v1/titles/:title_id/reviews - Review a title
pub async fn create_review(
    State(handlers): State<ReviewHandlers>,
    CurrentActor(actor): CurrentActor,
    Path(title_id): Path<String>,
    Json(req): Json<CreateReviewRequest>,
) -> Response {
    let title_id: TitleId = match parse_id(&title_id, "title") {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = CreateReviewCommand {
        score: req.score,
        text: req.text,
    };

    match handlers.review_handler.create(&actor, title_id, cmd).await {
        Ok(view) => (StatusCode::CREATED, Json(ReviewResponse::from(view))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/titles/:title_id/reviews/:review_id - Review detail
pub async fn get_review(
    State(handlers): State<ReviewHandlers>,
    CurrentActor(actor): CurrentActor,
    Path((title_id, review_id)): Path<(String, String)>,
) -> Response {
    let (title_id, review_id) = match parse_review_path(&title_id, &review_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    match handlers
        .review_handler
        .get(&actor, title_id, review_id)
        .await
    {
        Ok(view) => (StatusCode::OK, Json(ReviewResponse::from(view))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PATCH /api/v1/titles/:title_id/reviews/:review_id - Edit a review
pub async fn update_review(
    State(handlers): State<ReviewHandlers>,
    CurrentActor(actor): CurrentActor,
    Path((title_id, review_id)): Path<(String, String)>,
    Json(req): Json<UpdateReviewRequest>,
) -> Response {
    let (title_id, review_id) = match parse_review_path(&title_id, &review_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = UpdateReviewCommand {
        score: req.score,
        text: req.text,
    };

    match handlers
        .review_handler
        .update(&actor, title_id, review_id, cmd)
        .await
    {
        Ok(view) => (StatusCode::OK, Json(ReviewResponse::from(view))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/v1/titles/:title_id/reviews/:review_id - Delete a review
pub async fn delete_review(
    State(handlers): State<ReviewHandlers>,
    CurrentActor(actor): CurrentActor,
    Path((title_id, review_id)): Path<(String, String)>,
) -> Response {
    let (title_id, review_id) = match parse_review_path(&title_id, &review_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    match handlers
        .review_handler
        .delete(&actor, title_id, review_id)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

fn parse_review_path(title_id: &str, review_id: &str) -> Result<(TitleId, ReviewId), Response> {
    Ok((
        parse_id(title_id, "title")?,
        parse_id(review_id, "review")?,
    ))
}

// ════════════════════════════════════════════════════════════════════════════
// Comments
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/v1/titles/:title_id/reviews/:review_id/comments - List comments
pub async fn list_comments(
    State(handlers): State<ReviewHandlers>,
    CurrentActor(actor): CurrentActor,
    Path((title_id, review_id)): Path<(String, String)>,
) -> Response {
    let (title_id, review_id) = match parse_review_path(&title_id, &review_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    match handlers
        .comment_handler
        .list(&actor, title_id, review_id)
        .await
    {
        Ok(views) => {
            let comments: Vec<CommentResponse> = views.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(comments)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/v1/titles/:title_id/reviews/:review_id/comments - Comment on a review
pub async fn create_comment(
    State(handlers): State<ReviewHandlers>,
    CurrentActor(actor): CurrentActor,
    Path((title_id, review_id)): Path<(String, String)>,
    Json(req): Json<CreateCommentRequest>,
) -> Response {
    let (title_id, review_id) = match parse_review_path(&title_id, &review_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = CreateCommentCommand { text: req.text };

    match handlers
        .comment_handler
        .create(&actor, title_id, review_id, cmd)
        .await
    {
        Ok(view) => (StatusCode::CREATED, Json(CommentResponse::from(view))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET .../comments/:comment_id - Comment detail
pub async fn get_comment(
    State(handlers): State<ReviewHandlers>,
    CurrentActor(actor): CurrentActor,
    Path((title_id, review_id, comment_id)): Path<(String, String, String)>,
) -> Response {
    let (title_id, review_id, comment_id) =
        match parse_comment_path(&title_id, &review_id, &comment_id) {
            Ok(ids) => ids,
            Err(response) => return response,
        };

    match handlers
        .comment_handler
        .get(&actor, title_id, review_id, comment_id)
        .await
    {
        Ok(view) => (StatusCode::OK, Json(CommentResponse::from(view))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PATCH .../comments/:comment_id - Edit a comment
pub async fn update_comment(
    State(handlers): State<ReviewHandlers>,
    CurrentActor(actor): CurrentActor,
    Path((title_id, review_id, comment_id)): Path<(String, String, String)>,
    Json(req): Json<UpdateCommentRequest>,
) -> Response {
    let (title_id, review_id, comment_id) =
        match parse_comment_path(&title_id, &review_id, &comment_id) {
            Ok(ids) => ids,
            Err(response) => return response,
        };

    let cmd = UpdateCommentCommand { text: req.text };

    match handlers
        .comment_handler
        .update(&actor, title_id, review_id, comment_id, cmd)
        .await
    {
        Ok(view) => (StatusCode::OK, Json(CommentResponse::from(view))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE .../comments/:comment_id - Delete a comment
pub async fn delete_comment(
    State(handlers): State<ReviewHandlers>,
    CurrentActor(actor): CurrentActor,
    Path((title_id, review_id, comment_id)): Path<(String, String, String)>,
) -> Response {
    let (title_id, review_id, comment_id) =
        match parse_comment_path(&title_id, &review_id, &comment_id) {
            Ok(ids) => ids,
            Err(response) => return response,
        };

    match handlers
        .comment_handler
        .delete(&actor, title_id, review_id, comment_id)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

fn parse_comment_path(
    title_id: &str,
    review_id: &str,
    comment_id: &str,
) -> Result<(TitleId, ReviewId, CommentId), Response> {
    Ok((
        parse_id(title_id, "title")?,
        parse_id(review_id, "review")?,
        parse_id(comment_id, "comment")?,
    ))
}
