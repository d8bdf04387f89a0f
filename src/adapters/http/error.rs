//! Client-facing error responses.
//!
//! Every domain error is recovered at the request boundary and mapped to a
//! status plus a JSON `{error, code}` body; none are fatal to the process.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON body returned for every failed request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, "BAD_REQUEST")
    }
}

/// Maps a domain error to its client-facing response.
pub fn domain_error_response(error: DomainError) -> Response {
    let status = match error.code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat
        | ErrorCode::Conflict
        | ErrorCode::InvalidConfirmationCode => StatusCode::BAD_REQUEST,

        ErrorCode::UserNotFound
        | ErrorCode::TitleNotFound
        | ErrorCode::CategoryNotFound
        | ErrorCode::GenreNotFound
        | ErrorCode::ReviewNotFound
        | ErrorCode::CommentNotFound => StatusCode::NOT_FOUND,

        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,

        ErrorCode::DeliveryError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(code = %error.code, message = %error.message, "request failed");
    }

    (
        status,
        Json(ErrorResponse::new(error.message, error.code.to_string())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_for(code: ErrorCode) -> StatusCode {
        domain_error_response(DomainError::new(code, "x")).status()
    }

    #[test]
    fn validation_and_conflict_map_to_400() {
        assert_eq!(status_for(ErrorCode::ValidationFailed), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::EmptyField), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::OutOfRange), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::InvalidFormat), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::Conflict), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(ErrorCode::InvalidConfirmationCode),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_levels_map_to_404() {
        for code in [
            ErrorCode::UserNotFound,
            ErrorCode::TitleNotFound,
            ErrorCode::CategoryNotFound,
            ErrorCode::GenreNotFound,
            ErrorCode::ReviewNotFound,
            ErrorCode::CommentNotFound,
        ] {
            assert_eq!(status_for(code), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn auth_codes_map_to_401_and_403() {
        assert_eq!(status_for(ErrorCode::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(ErrorCode::Forbidden), StatusCode::FORBIDDEN);
    }

    #[test]
    fn infrastructure_codes_map_to_500() {
        assert_eq!(
            status_for(ErrorCode::InternalError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
