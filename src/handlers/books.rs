use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};

use super::parse_id;
use crate::error::ApiError;
use crate::models::BookPayload;
use crate::services::BookService;
use crate::AppState;

/// POST /books - add a new book
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<BookPayload>,
) -> Result<Json<Value>, ApiError> {
    let book = BookService::new(&state).create(payload).await?;

    Ok(Json(json!({
        "message": "success add new book",
        "book": book,
    })))
}

/// GET /jwt/books
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let books = BookService::new(&state).list().await?;

    Ok(Json(json!({
        "status": "success",
        "books": books,
    })))
}

/// GET /jwt/books/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let book = BookService::new(&state).get(parse_id(&id)).await?;

    Ok(Json(json!({
        "status": "success",
        "book": book,
    })))
}

/// PUT /jwt/books/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<BookPayload>,
) -> Result<Json<Value>, ApiError> {
    let book = BookService::new(&state)
        .update(parse_id(&id), payload)
        .await?;

    Ok(Json(json!({
        "status": "Success update book",
        "book": book,
    })))
}

/// DELETE /jwt/books/:id
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    BookService::new(&state).delete(parse_id(&id)).await?;

    Ok(Json(json!({
        "message": "Success delete book",
    })))
}
