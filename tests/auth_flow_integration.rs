//! End-to-end tests for the signup -> confirmation code -> token handshake,
//! driven through the HTTP router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use critiq::adapters::auth::JwtTokenService;
use critiq::adapters::delivery::RecordingCodeDelivery;
use critiq::adapters::http::{api_router, AppContext};

struct TestApp {
    app: Router,
    delivery: Arc<RecordingCodeDelivery>,
}

fn test_app() -> TestApp {
    let delivery = Arc::new(RecordingCodeDelivery::new());
    let ctx = AppContext::in_memory(
        Arc::new(JwtTokenService::new("test-secret", 3600)),
        delivery.clone(),
        16,
    );
    TestApp {
        app: api_router(&ctx),
        delivery,
    }
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn signup(app: &Router, username: &str, email: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/api/v1/auth/signup",
        None,
        Some(json!({"username": username, "email": email})),
    )
    .await
}

async fn request_token(app: &Router, username: &str, code: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/api/v1/auth/token",
        None,
        Some(json!({"username": username, "confirmation_code": code})),
    )
    .await
}

#[tokio::test]
async fn signup_then_token_then_me() {
    let fixture = test_app();

    let (status, body) = signup(&fixture.app, "alice", "a@x.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "a@x.com");

    let code = fixture.delivery.last_code_for("alice").unwrap();
    let (status, body) = request_token(&fixture.app, "alice", &code).await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(
        &fixture.app,
        Method::GET,
        "/api/v1/users/me",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["role"], "user");
}

#[tokio::test]
async fn wrong_code_is_400_unknown_username_is_404() {
    let fixture = test_app();
    signup(&fixture.app, "alice", "a@x.com").await;

    let (status, body) = request_token(&fixture.app, "alice", "wrong").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_CONFIRMATION_CODE");

    let (status, body) = request_token(&fixture.app, "nobody", "whatever").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn used_code_stays_valid_until_regenerated() {
    // Policy under test: a code is NOT consumed by a successful exchange;
    // only the next signup call invalidates it by regeneration.
    let fixture = test_app();
    signup(&fixture.app, "alice", "a@x.com").await;
    let first = fixture.delivery.last_code_for("alice").unwrap();

    let (status, _) = request_token(&fixture.app, "alice", &first).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = request_token(&fixture.app, "alice", &first).await;
    assert_eq!(status, StatusCode::OK);

    // Second signup for the same pair: same identity, fresh code.
    let (status, _) = signup(&fixture.app, "alice", "a@x.com").await;
    assert_eq!(status, StatusCode::OK);
    let second = fixture.delivery.last_code_for("alice").unwrap();
    assert_ne!(first, second);

    let (status, _) = request_token(&fixture.app, "alice", &first).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = request_token(&fixture.app, "alice", &second).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn signup_collision_with_different_identity_is_400() {
    let fixture = test_app();
    signup(&fixture.app, "alice", "a@x.com").await;

    let (status, body) = signup(&fixture.app, "alice", "imposter@x.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "CONFLICT");

    let (status, _) = signup(&fixture.app, "imposter", "a@x.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Only the original signup delivered a code.
    assert_eq!(fixture.delivery.sent().len(), 1);
}

#[tokio::test]
async fn malformed_fields_fail_validation() {
    let fixture = test_app();

    let (status, _) = signup(&fixture.app, "has space", "a@x.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = signup(&fixture.app, "alice", "not-an-email").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = signup(&fixture.app, "me", "me@x.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn me_requires_a_valid_token() {
    let fixture = test_app();

    let (status, _) = send(&fixture.app, Method::GET, "/api/v1/users/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // An invalid token degrades to the anonymous actor, not a parse error.
    let (status, _) = send(
        &fixture.app,
        Method::GET,
        "/api/v1/users/me",
        Some("garbage"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn self_service_patch_cannot_change_role() {
    let fixture = test_app();
    signup(&fixture.app, "alice", "a@x.com").await;
    let code = fixture.delivery.last_code_for("alice").unwrap();
    let (_, body) = request_token(&fixture.app, "alice", &code).await;
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(
        &fixture.app,
        Method::PATCH,
        "/api/v1/users/me",
        Some(&token),
        Some(json!({"email": "new@x.com", "role": "admin"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "new@x.com");
    assert_eq!(body["role"], "user");
}

#[tokio::test]
async fn account_administration_is_admin_only() {
    let fixture = test_app();
    signup(&fixture.app, "alice", "a@x.com").await;
    let code = fixture.delivery.last_code_for("alice").unwrap();
    let (_, body) = request_token(&fixture.app, "alice", &code).await;
    let token = body["token"].as_str().unwrap().to_string();

    let (status, _) = send(&fixture.app, Method::GET, "/api/v1/users", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &fixture.app,
        Method::GET,
        "/api/v1/users",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
