use crate::auth::{constant_time_eq, TokenAuth};
use crate::error::ApiError;
use crate::models::{TokenPatch, User, UserPayload};
use crate::store::{Arg, Repository, StoreError};
use crate::AppState;

/// Orchestrates user CRUD and the login flow, translating store errors into
/// user-facing categories per operation.
pub struct UserService {
    repo: Repository<User>,
    auth: TokenAuth,
}

impl UserService {
    pub fn new(state: &AppState) -> Self {
        Self {
            repo: Repository::new(state.pool.clone()),
            auth: state.auth.clone(),
        }
    }

    pub async fn create(&self, payload: UserPayload) -> Result<User, ApiError> {
        self.repo
            .create(&payload)
            .await
            .map_err(|e| ApiError::bad_request(e.to_string()))
    }

    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.repo
            .list()
            .await
            .map_err(|e| ApiError::bad_request(e.to_string()))
    }

    pub async fn get(&self, id: i64) -> Result<User, ApiError> {
        match self.repo.get_by_id(id).await {
            Ok(user) => Ok(user),
            Err(StoreError::NotFound) => Err(ApiError::not_found("record not found")),
            Err(e) => {
                tracing::error!("user lookup failed: {}", e);
                Err(ApiError::internal("internal error"))
            }
        }
    }

    pub async fn update(&self, id: i64, payload: UserPayload) -> Result<User, ApiError> {
        match self.repo.update_by_id(id, &payload).await {
            Ok(user) => Ok(user),
            Err(StoreError::NotFound) => Err(ApiError::not_found("record not found")),
            Err(e) => Err(ApiError::bad_request(e.to_string())),
        }
    }

    /// Soft delete. The store does not distinguish a missing or already
    /// deleted id from a successful delete, so only a hard store failure
    /// surfaces as not-found here.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.repo
            .delete_by_id(id)
            .await
            .map_err(|_| ApiError::not_found("record not found"))
    }

    /// Verifies the credential pair against live rows, mints a bearer token
    /// and persists it onto the user through the store's update path,
    /// overwriting any token from an earlier login.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let candidates = self
            .repo
            .find_all_by("email", Arg::text(email))
            .await
            .map_err(|e| {
                tracing::error!("credential lookup failed: {}", e);
                ApiError::internal("internal error")
            })?;

        // Email is not unique; the match is on the email+password pair.
        let user = candidates
            .into_iter()
            .find(|u| constant_time_eq(u.password.as_bytes(), password.as_bytes()))
            .ok_or_else(|| ApiError::unauthorized("invalid email or password"))?;

        let token = self.auth.issue(user.id).map_err(|e| {
            tracing::error!("token issuance failed: {}", e);
            ApiError::internal("internal error")
        })?;

        match self.repo.update_by_id(user.id, &TokenPatch { token }).await {
            Ok(user) => Ok(user),
            Err(e) => {
                tracing::error!("token persistence failed: {}", e);
                Err(ApiError::internal("internal error"))
            }
        }
    }
}
