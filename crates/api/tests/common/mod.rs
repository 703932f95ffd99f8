//! Shared helpers for API integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use cpms_api::auth::jwt::JwtConfig;
use cpms_api::config::ServerConfig;
use cpms_api::router::build_app_router;
use cpms_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a request with an optional JSON body and optional Bearer token.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> Response<axum::body::Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    request(app, "GET", uri, None, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body must be valid JSON")
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Register a user and log in, returning the access token.
pub async fn register_and_login(app: &Router, email: &str, password: &str) -> String {
    let response = request(
        app,
        "POST",
        "/users",
        Some(json!({ "email": email, "password": password })),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = request(
        app,
        "POST",
        "/users/login",
        Some(json!({ "email": email, "password": password })),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("login response must contain a token")
        .to_string()
}
