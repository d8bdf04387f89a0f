//! HTTP handlers for profile and account endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::middleware::CurrentActor;
use crate::application::handlers::{
    AccountAdminHandler, CreateAccountCommand, ProfileHandler, UpdateAccountCommand,
    UpdateProfileCommand,
};

use super::dto::{CreateUserRequest, UpdateMeRequest, UpdateUserRequest, UserResponse};

#[derive(Clone)]
pub struct UserHandlers {
    profile_handler: Arc<ProfileHandler>,
    admin_handler: Arc<AccountAdminHandler>,
}

impl UserHandlers {
    pub fn new(
        profile_handler: Arc<ProfileHandler>,
        admin_handler: Arc<AccountAdminHandler>,
    ) -> Self {
        Self {
            profile_handler,
            admin_handler,
        }
    }
}

/// GET /api/v1/users/me - The caller's own profile
pub async fn get_me(
    State(handlers): State<UserHandlers>,
    CurrentActor(actor): CurrentActor,
) -> Response {
    match handlers.profile_handler.get(&actor).await {
        Ok(identity) => (StatusCode::OK, Json(UserResponse::from(identity))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PATCH /api/v1/users/me - Update the caller's own profile
pub async fn update_me(
    State(handlers): State<UserHandlers>,
    CurrentActor(actor): CurrentActor,
    Json(req): Json<UpdateMeRequest>,
) -> Response {
    let cmd = UpdateProfileCommand {
        username: req.username,
        email: req.email,
        role: req.role,
    };

    match handlers.profile_handler.update(&actor, cmd).await {
        Ok(identity) => (StatusCode::OK, Json(UserResponse::from(identity))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/users - List accounts (admin)
pub async fn list_users(
    State(handlers): State<UserHandlers>,
    CurrentActor(actor): CurrentActor,
) -> Response {
    match handlers.admin_handler.list(&actor).await {
        Ok(identities) => {
            let users: Vec<UserResponse> = identities.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(users)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/v1/users - Create an account (admin)
pub async fn create_user(
    State(handlers): State<UserHandlers>,
    CurrentActor(actor): CurrentActor,
    Json(req): Json<CreateUserRequest>,
) -> Response {
    let cmd = CreateAccountCommand {
        username: req.username,
        email: req.email,
        role: req.role,
    };

    match handlers.admin_handler.create(&actor, cmd).await {
        Ok(identity) => (StatusCode::CREATED, Json(UserResponse::from(identity))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/users/:username - Account detail (admin)
pub async fn get_user(
    State(handlers): State<UserHandlers>,
    CurrentActor(actor): CurrentActor,
    Path(username): Path<String>,
) -> Response {
    match handlers.admin_handler.get(&actor, &username).await {
        Ok(identity) => (StatusCode::OK, Json(UserResponse::from(identity))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PATCH /api/v1/users/:username - Update an account (admin)
pub async fn update_user(
    State(handlers): State<UserHandlers>,
    CurrentActor(actor): CurrentActor,
    Path(username): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Response {
    let cmd = UpdateAccountCommand {
        username: req.username,
        email: req.email,
        role: req.role,
    };

    match handlers.admin_handler.update(&actor, &username, cmd).await {
        Ok(identity) => (StatusCode::OK, Json(UserResponse::from(identity))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/v1/users/:username - Delete an account (admin)
pub async fn delete_user(
    State(handlers): State<UserHandlers>,
    CurrentActor(actor): CurrentActor,
    Path(username): Path<String>,
) -> Response {
    match handlers.admin_handler.delete(&actor, &username).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
