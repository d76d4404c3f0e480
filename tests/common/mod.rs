#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use users_books_api::auth::TokenAuth;
use users_books_api::config::AuthConfig;
use users_books_api::{routes, store, AppState};

pub const TEST_SECRET: &str = "test-secret";

/// Single-connection in-memory pool so every request in a test sees the same
/// database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    store::migrate(&pool).await.expect("schema migration");
    pool
}

pub fn token_auth(ttl_secs: i64) -> TokenAuth {
    TokenAuth::new(&AuthConfig {
        jwt_secret: TEST_SECRET.to_string(),
        token_ttl_secs: ttl_secs,
    })
    .expect("token auth")
}

pub async fn test_state() -> AppState {
    AppState {
        pool: test_pool().await,
        auth: token_auth(3600),
    }
}

/// Router plus the state behind it, so tests can both drive HTTP requests and
/// inspect rows directly.
pub async fn test_app() -> (Router, AppState) {
    let state = test_state().await;
    (routes::app(state.clone()), state)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn authed_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .expect("request")
}

pub fn authed_json_request(method: &str, uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}
