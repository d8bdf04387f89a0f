//! HTTP routes for profile and account endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_user, delete_user, get_me, get_user, list_users, update_me, update_user, UserHandlers,
};

/// Creates the users router.
///
/// `/me` is registered before `/:username`, but the username value object
/// also reserves the literal `me`, so the two can never collide.
pub fn user_routes(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/me", get(get_me).patch(update_me))
        .route(
            "/:username",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .with_state(handlers)
}
