use crate::error::ApiError;
use crate::models::{Book, BookPayload};
use crate::store::{Repository, StoreError};
use crate::AppState;

/// Thin orchestration over the book table; no business rules beyond what the
/// store enforces.
pub struct BookService {
    repo: Repository<Book>,
}

impl BookService {
    pub fn new(state: &AppState) -> Self {
        Self {
            repo: Repository::new(state.pool.clone()),
        }
    }

    pub async fn create(&self, payload: BookPayload) -> Result<Book, ApiError> {
        self.repo
            .create(&payload)
            .await
            .map_err(|e| ApiError::bad_request(e.to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Book>, ApiError> {
        self.repo
            .list()
            .await
            .map_err(|e| ApiError::bad_request(e.to_string()))
    }

    pub async fn get(&self, id: i64) -> Result<Book, ApiError> {
        match self.repo.get_by_id(id).await {
            Ok(book) => Ok(book),
            Err(StoreError::NotFound) => Err(ApiError::not_found("record not found")),
            Err(e) => {
                tracing::error!("book lookup failed: {}", e);
                Err(ApiError::internal("internal error"))
            }
        }
    }

    pub async fn update(&self, id: i64, payload: BookPayload) -> Result<Book, ApiError> {
        match self.repo.update_by_id(id, &payload).await {
            Ok(book) => Ok(book),
            Err(StoreError::NotFound) => Err(ApiError::not_found("record not found")),
            Err(e) => Err(ApiError::bad_request(e.to_string())),
        }
    }

    /// Soft delete, with the same missing-id asymmetry as the user service.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.repo
            .delete_by_id(id)
            .await
            .map_err(|_| ApiError::not_found("record not found"))
    }
}
