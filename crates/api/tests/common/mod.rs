//! Shared harness for API integration tests.
//!
//! Builds the production router (same middleware stack as `main.rs`) on
//! top of the per-test database `#[sqlx::test]` provides, plus small
//! request/response helpers.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use neurowealth_api::config::ServerConfig;
use neurowealth_api::router::build_app_router;
use neurowealth_api::state::AppState;

/// Token the test config accepts on `/admin` routes.
pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin_token: Some(TEST_ADMIN_TOKEN.to_string()),
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// GET `uri`.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST `uri` with an empty body.
pub async fn post(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST `uri` with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST `uri` with an extra header and empty body.
pub async fn post_with_header(
    app: Router,
    uri: &str,
    header: (&str, &str),
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header.0, header.1)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!("response body was not JSON ({e}): {:?}", String::from_utf8_lossy(&bytes))
    })
}

/// Assert status and return the parsed body in one step.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
