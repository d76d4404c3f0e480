use sqlx::SqlitePool;

use crate::auth::TokenAuth;

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

/// Shared application state: the connection pool and the signing keys, both
/// built once at startup and cloned into each handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth: TokenAuth,
}
