//! HTTP routes for title, category and genre endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_category, create_genre, create_title, delete_category, delete_genre, delete_title,
    get_title, list_categories, list_genres, list_titles, update_title, CatalogHandlers,
};

/// Creates the titles router.
///
/// The detail segment is named `:title_id` to line up with the nested
/// review routes mounted under the same path.
pub fn title_routes(handlers: CatalogHandlers) -> Router {
    Router::new()
        .route("/", get(list_titles).post(create_title))
        .route(
            "/:title_id",
            get(get_title).patch(update_title).delete(delete_title),
        )
        .with_state(handlers)
}

/// Creates the categories router.
pub fn category_routes(handlers: CatalogHandlers) -> Router {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/:slug", axum::routing::delete(delete_category))
        .with_state(handlers)
}

/// Creates the genres router.
pub fn genre_routes(handlers: CatalogHandlers) -> Router {
    Router::new()
        .route("/", get(list_genres).post(create_genre))
        .route("/:slug", axum::routing::delete(delete_genre))
        .with_state(handlers)
}
