//! HTTP handlers for title, category and genre endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::adapters::http::middleware::CurrentActor;
use crate::application::handlers::{
    CategoryHandler, CreateTaxonomyCommand, CreateTitleCommand, GenreHandler, TitleHandler,
    UpdateTitleCommand,
};
use crate::domain::foundation::TitleId;

use super::dto::{
    CreateTaxonomyRequest, CreateTitleRequest, ListTitlesQuery, TaxonomyResponse, TitleResponse,
    UpdateTitleRequest,
};

#[derive(Clone)]
pub struct CatalogHandlers {
    title_handler: Arc<TitleHandler>,
    category_handler: Arc<CategoryHandler>,
    genre_handler: Arc<GenreHandler>,
}

impl CatalogHandlers {
    pub fn new(
        title_handler: Arc<TitleHandler>,
        category_handler: Arc<CategoryHandler>,
        genre_handler: Arc<GenreHandler>,
    ) -> Self {
        Self {
            title_handler,
            category_handler,
            genre_handler,
        }
    }
}

fn parse_title_id(raw: &str) -> Result<TitleId, Response> {
    raw.parse::<TitleId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid title ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Titles
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/v1/titles - List titles with ratings
pub async fn list_titles(
    State(handlers): State<CatalogHandlers>,
    CurrentActor(actor): CurrentActor,
    Query(query): Query<ListTitlesQuery>,
) -> Response {
    match handlers
        .title_handler
        .list(&actor, query.title_ordering())
        .await
    {
        Ok(views) => {
            let titles: Vec<TitleResponse> = views.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(titles)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/v1/titles - Create a title (admin)
pub async fn create_title(
    State(handlers): State<CatalogHandlers>,
    CurrentActor(actor): CurrentActor,
    Json(req): Json<CreateTitleRequest>,
) -> Response {
    let cmd = CreateTitleCommand {
        name: req.name,
        year: req.year,
        category: req.category,
        genres: req.genres,
    };

    match handlers.title_handler.create(&actor, cmd).await {
        Ok(view) => (StatusCode::CREATED, Json(TitleResponse::from(view))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/titles/:id - Title detail with rating
pub async fn get_title(
    State(handlers): State<CatalogHandlers>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_title_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.title_handler.get(&actor, id).await {
        Ok(view) => (StatusCode::OK, Json(TitleResponse::from(view))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PATCH /api/v1/titles/:id - Update a title (admin)
pub async fn update_title(
    State(handlers): State<CatalogHandlers>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<String>,
    Json(req): Json<UpdateTitleRequest>,
) -> Response {
    let id = match parse_title_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateTitleCommand {
        name: req.name,
        year: req.year,
        category: req.category,
        genres: req.genres,
    };

    match handlers.title_handler.update(&actor, id, cmd).await {
        Ok(view) => (StatusCode::OK, Json(TitleResponse::from(view))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/v1/titles/:id - Delete a title and its reviews (admin)
pub async fn delete_title(
    State(handlers): State<CatalogHandlers>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_title_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.title_handler.delete(&actor, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Categories and genres
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/v1/categories - List categories
pub async fn list_categories(
    State(handlers): State<CatalogHandlers>,
    CurrentActor(actor): CurrentActor,
) -> Response {
    match handlers.category_handler.list(&actor).await {
        Ok(categories) => {
            let body: Vec<TaxonomyResponse> = categories.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/v1/categories - Create a category (admin)
pub async fn create_category(
    State(handlers): State<CatalogHandlers>,
    CurrentActor(actor): CurrentActor,
    Json(req): Json<CreateTaxonomyRequest>,
) -> Response {
    let cmd = CreateTaxonomyCommand {
        name: req.name,
        slug: req.slug,
    };

    match handlers.category_handler.create(&actor, cmd).await {
        Ok(category) => {
            (StatusCode::CREATED, Json(TaxonomyResponse::from(category))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/v1/categories/:slug - Delete a category (admin)
pub async fn delete_category(
    State(handlers): State<CatalogHandlers>,
    CurrentActor(actor): CurrentActor,
    Path(slug): Path<String>,
) -> Response {
    match handlers.category_handler.delete(&actor, &slug).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/genres - List genres
pub async fn list_genres(
    State(handlers): State<CatalogHandlers>,
    CurrentActor(actor): CurrentActor,
) -> Response {
    match handlers.genre_handler.list(&actor).await {
        Ok(genres) => {
            let body: Vec<TaxonomyResponse> = genres.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/v1/genres - Create a genre (admin)
pub async fn create_genre(
    State(handlers): State<CatalogHandlers>,
    CurrentActor(actor): CurrentActor,
    Json(req): Json<CreateTaxonomyRequest>,
) -> Response {
    let cmd = CreateTaxonomyCommand {
        name: req.name,
        slug: req.slug,
    };

    match handlers.genre_handler.create(&actor, cmd).await {
        Ok(genre) => (StatusCode::CREATED, Json(TaxonomyResponse::from(genre))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/v1/genres/:slug - Delete a genre (admin)
pub async fn delete_genre(
    State(handlers): State<CatalogHandlers>,
    CurrentActor(actor): CurrentActor,
    Path(slug): Path<String>,
) -> Response {
    match handlers.genre_handler.delete(&actor, &slug).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
