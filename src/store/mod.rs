use sqlx::SqlitePool;
use thiserror::Error;

pub mod repository;

pub use repository::{Arg, Entity, Insertable, PartialUpdate, Repository};

/// Errors surfaced by the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The id either never existed or the row is soft-deleted; the two cases
    /// are indistinguishable to callers.
    #[error("record not found")]
    NotFound,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

const CREATE_USERS: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL DEFAULT '',
    email       TEXT NOT NULL DEFAULT '',
    password    TEXT NOT NULL DEFAULT '',
    token       TEXT,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL,
    deleted_at  TEXT
)";

const CREATE_BOOKS: &str = "\
CREATE TABLE IF NOT EXISTS books (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL DEFAULT '',
    author      TEXT NOT NULL DEFAULT '',
    year        INTEGER NOT NULL DEFAULT 0,
    token       TEXT NOT NULL DEFAULT '',
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL,
    deleted_at  TEXT
)";

/// Applies the schema. Idempotent, run on every startup. AUTOINCREMENT keeps
/// ids monotonic so an id is never handed out again after its row is deleted.
pub async fn migrate(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_BOOKS).execute(pool).await?;
    Ok(())
}
