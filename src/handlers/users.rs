use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::parse_id;
use crate::error::ApiError;
use crate::models::UserPayload;
use crate::services::UserService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /login - verify credentials and hand out a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let user = UserService::new(&state)
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(json!({
        "status": "success login",
        "user": user,
    })))
}

/// POST /users - register a new user
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<Value>, ApiError> {
    let user = UserService::new(&state).create(payload).await?;

    Ok(Json(json!({
        "message": "success create new user",
        "user": user,
    })))
}

/// GET /jwt/users
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let users = UserService::new(&state).list().await?;

    Ok(Json(json!({
        "status": "success",
        "users": users,
    })))
}

/// GET /jwt/users/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let user = UserService::new(&state).get(parse_id(&id)).await?;

    Ok(Json(json!({
        "status": "success",
        "user": user,
    })))
}

/// PUT /jwt/users/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<Value>, ApiError> {
    let user = UserService::new(&state)
        .update(parse_id(&id), payload)
        .await?;

    Ok(Json(json!({
        "status": "Success update user",
        "user": user,
    })))
}

/// DELETE /jwt/users/:id
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    UserService::new(&state).delete(parse_id(&id)).await?;

    Ok(Json(json!({
        "message": "Success delete user",
    })))
}
