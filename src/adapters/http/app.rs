//! Application wiring: dependency context and router assembly.

use std::sync::Arc;

use axum::{http::StatusCode, middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::adapters::http::auth::{auth_routes, AuthHandlers};
use crate::adapters::http::catalog::{
    category_routes, genre_routes, title_routes, CatalogHandlers,
};
use crate::adapters::http::middleware::{actor_middleware, AuthState};
use crate::adapters::http::reviews::{comment_routes, review_routes, ReviewHandlers};
use crate::adapters::http::users::{user_routes, UserHandlers};
use crate::adapters::memory::{
    InMemoryCategoryRepository, InMemoryCommentRepository, InMemoryGenreRepository,
    InMemoryIdentityRepository, InMemoryReviewRepository, InMemoryTitleRepository,
};
use crate::application::handlers::{
    AccountAdminHandler, CategoryHandler, CommentHandler, GenreHandler, IssueTokenHandler,
    ProfileHandler, ReviewHandler, SignupHandler, TitleHandler,
};
use crate::application::ResourceResolver;
use crate::ports::{
    CategoryRepository, CodeDelivery, CommentRepository, GenreRepository, IdentityRepository,
    ReviewRepository, TitleRepository, TokenService,
};

/// Shared application dependencies, wired once at startup.
pub struct AppContext {
    pub identities: Arc<dyn IdentityRepository>,
    pub titles: Arc<dyn TitleRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub genres: Arc<dyn GenreRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub delivery: Arc<dyn CodeDelivery>,
    pub confirmation_code_length: usize,
}

impl AppContext {
    /// Wires the context over the in-memory stores.
    pub fn in_memory(
        tokens: Arc<dyn TokenService>,
        delivery: Arc<dyn CodeDelivery>,
        confirmation_code_length: usize,
    ) -> Self {
        Self {
            identities: Arc::new(InMemoryIdentityRepository::new()),
            titles: Arc::new(InMemoryTitleRepository::new()),
            categories: Arc::new(InMemoryCategoryRepository::new()),
            genres: Arc::new(InMemoryGenreRepository::new()),
            reviews: Arc::new(InMemoryReviewRepository::new()),
            comments: Arc::new(InMemoryCommentRepository::new()),
            tokens,
            delivery,
            confirmation_code_length,
        }
    }
}

/// Builds the full API router over the given context.
///
/// Every route passes the actor middleware, so handlers always see a
/// resolved [`crate::domain::foundation::Actor`] - anonymous when no valid
/// credential was presented.
pub fn api_router(ctx: &AppContext) -> Router {
    let resolver = Arc::new(ResourceResolver::new(
        ctx.titles.clone(),
        ctx.reviews.clone(),
    ));

    let auth_handlers = AuthHandlers::new(
        Arc::new(SignupHandler::new(
            ctx.identities.clone(),
            ctx.delivery.clone(),
            ctx.confirmation_code_length,
        )),
        Arc::new(IssueTokenHandler::new(
            ctx.identities.clone(),
            ctx.tokens.clone(),
        )),
    );

    let user_handlers = UserHandlers::new(
        Arc::new(ProfileHandler::new(ctx.identities.clone())),
        Arc::new(AccountAdminHandler::new(ctx.identities.clone())),
    );

    let catalog_handlers = CatalogHandlers::new(
        Arc::new(TitleHandler::new(
            ctx.titles.clone(),
            ctx.categories.clone(),
            ctx.genres.clone(),
            ctx.reviews.clone(),
            ctx.comments.clone(),
        )),
        Arc::new(CategoryHandler::new(ctx.categories.clone())),
        Arc::new(GenreHandler::new(ctx.genres.clone())),
    );

    let review_handlers = ReviewHandlers::new(
        Arc::new(ReviewHandler::new(
            resolver.clone(),
            ctx.reviews.clone(),
            ctx.comments.clone(),
            ctx.identities.clone(),
        )),
        Arc::new(CommentHandler::new(
            resolver,
            ctx.comments.clone(),
            ctx.identities.clone(),
        )),
    );

    let api = Router::new()
        .nest("/auth", auth_routes(auth_handlers))
        .nest("/users", user_routes(user_handlers))
        .nest("/titles", title_routes(catalog_handlers.clone()))
        .nest("/categories", category_routes(catalog_handlers.clone()))
        .nest("/genres", genre_routes(catalog_handlers))
        .nest(
            "/titles/:title_id/reviews",
            review_routes(review_handlers.clone()),
        )
        .nest(
            "/titles/:title_id/reviews/:review_id/comments",
            comment_routes(review_handlers),
        );

    let auth_state = AuthState::new(ctx.tokens.clone(), ctx.identities.clone());

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        .layer(middleware::from_fn_with_state(auth_state, actor_middleware))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::JwtTokenService;
    use crate::adapters::delivery::RecordingCodeDelivery;

    #[test]
    fn router_assembles_without_route_conflicts() {
        let ctx = AppContext::in_memory(
            Arc::new(JwtTokenService::new("secret", 3600)),
            Arc::new(RecordingCodeDelivery::new()),
            16,
        );
        let _router = api_router(&ctx);
    }
}
