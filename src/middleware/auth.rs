use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::AppState;

/// Authenticated caller identity, injected into protected requests once the
/// bearer token checks out.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub user_id: i64,
}

/// Authorization gate for protected routes. Verifies the bearer token's
/// signature and expiry before the handler runs; a missing, malformed or
/// expired token is rejected here and the handler never executes.
pub async fn require_bearer(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(&headers).map_err(ApiError::unauthorized)?;

    let claims = state.auth.verify(&token).map_err(|e| {
        tracing::debug!("bearer token rejected: {}", e);
        ApiError::unauthorized("invalid or expired token")
    })?;

    request.extensions_mut().insert(CurrentUser {
        user_id: claims.sub,
    });

    Ok(next.run(request).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<String, String> {
    let header = headers
        .get("authorization")
        .ok_or_else(|| "missing Authorization header".to_string())?;

    let value = header
        .to_str()
        .map_err(|_| "invalid Authorization header".to_string())?;

    match value.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.to_string()),
        Some(_) => Err("empty bearer token".to_string()),
        None => Err("Authorization header must use the Bearer scheme".to_string()),
    }
}
