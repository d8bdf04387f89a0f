//! HTTP routes for the nested review and comment endpoints.
//!
//! Both routers are nested under the title path by the application router,
//! so handlers receive the full parent id chain as path parameters.

use axum::{routing::get, Router};

use super::handlers::{
    create_comment, create_review, delete_comment, delete_review, get_comment, get_review,
    list_comments, list_reviews, update_comment, update_review, ReviewHandlers,
};

/// Creates the reviews router, nested at `/titles/:title_id/reviews`.
pub fn review_routes(handlers: ReviewHandlers) -> Router {
    Router::new()
        .route("/", get(list_reviews).post(create_review))
        .route(
            "/:review_id",
            get(get_review).patch(update_review).delete(delete_review),
        )
        .with_state(handlers)
}

/// Creates the comments router, nested at
/// `/titles/:title_id/reviews/:review_id/comments`.
pub fn comment_routes(handlers: ReviewHandlers) -> Router {
    Router::new()
        .route("/", get(list_comments).post(create_comment))
        .route(
            "/:comment_id",
            get(get_comment).patch(update_comment).delete(delete_comment),
        )
        .with_state(handlers)
}
