use sqlx::sqlite::SqlitePoolOptions;

use users_books_api::auth::TokenAuth;
use users_books_api::config::AppConfig;
use users_books_api::{routes, store, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL and JWT_SECRET.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();

    let pool = SqlitePoolOptions::new()
        .connect(&config.database_url)
        .await
        .unwrap_or_else(|e| panic!("failed to connect to {}: {}", config.database_url, e));

    store::migrate(&pool).await.expect("schema migration");

    let auth = TokenAuth::new(&config.auth).expect("token keys");

    let app = routes::app(AppState { pool, auth });

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("users-books API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
