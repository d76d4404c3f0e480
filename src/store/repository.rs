use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};

use crate::store::StoreError;

/// Row mapping for a stored record type.
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
    const TABLE: &'static str;
}

/// Column values written when a row is first inserted. Timestamps and the id
/// are supplied by the repository, not the payload.
pub trait Insertable<E: Entity> {
    fn values(&self) -> Vec<(&'static str, Arg)>;
}

/// Columns to overwrite on update. Implementations must skip fields left at
/// their type's default value: an empty string or zero integer means "not
/// supplied", even when the caller meant to clear the field.
pub trait PartialUpdate<E: Entity> {
    fn changes(&self) -> Vec<(&'static str, Arg)>;
}

/// Owned argument for dynamically assembled statements.
#[derive(Debug, Clone)]
pub enum Arg {
    Text(String),
    Int(i64),
    Timestamp(DateTime<Utc>),
}

impl Arg {
    pub fn text(value: impl Into<String>) -> Self {
        Arg::Text(value.into())
    }
}

/// Generic CRUD over one backing table, honoring soft deletion: every read
/// and write path filters on `deleted_at IS NULL`.
pub struct Repository<E> {
    pool: SqlitePool,
    _marker: std::marker::PhantomData<E>,
}

impl<E: Entity> Repository<E> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _marker: std::marker::PhantomData,
        }
    }

    /// Inserts a new row with both timestamps set to now and returns it with
    /// its store-assigned id.
    pub async fn create<D: Insertable<E>>(&self, draft: &D) -> Result<E, StoreError> {
        let now = Utc::now();
        let mut columns = draft.values();
        columns.push(("created_at", Arg::Timestamp(now)));
        columns.push(("updated_at", Arg::Timestamp(now)));

        let names: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
        let placeholders = vec!["?"; columns.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
            E::TABLE,
            names.join(", "),
            placeholders
        );

        let mut query = sqlx::query_as::<_, E>(&sql);
        for (_, arg) in columns {
            query = bind_query_as(query, arg);
        }
        Ok(query.fetch_one(&self.pool).await?)
    }

    /// All live rows, in store-defined order.
    pub async fn list(&self) -> Result<Vec<E>, StoreError> {
        let sql = format!("SELECT * FROM {} WHERE deleted_at IS NULL", E::TABLE);
        Ok(sqlx::query_as::<_, E>(&sql).fetch_all(&self.pool).await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<E, StoreError> {
        let sql = format!(
            "SELECT * FROM {} WHERE id = ? AND deleted_at IS NULL",
            E::TABLE
        );
        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    /// Exact-match lookup over live rows, returning every match. Columns
    /// like email carry no uniqueness guarantee, so callers get the full set.
    pub async fn find_all_by(&self, column: &str, value: Arg) -> Result<Vec<E>, StoreError> {
        let sql = format!(
            "SELECT * FROM {} WHERE {} = ? AND deleted_at IS NULL",
            E::TABLE,
            column
        );
        let query = bind_query_as(sqlx::query_as::<_, E>(&sql), value);
        Ok(query.fetch_all(&self.pool).await?)
    }

    /// Read-before-write: the row must exist and be live, otherwise NotFound.
    /// Only the columns the patch reports as changed are written; an empty
    /// change set leaves the row untouched. Returns the merged row.
    pub async fn update_by_id<P: PartialUpdate<E>>(
        &self,
        id: i64,
        patch: &P,
    ) -> Result<E, StoreError> {
        let current = self.get_by_id(id).await?;

        let changes = patch.changes();
        if changes.is_empty() {
            return Ok(current);
        }

        let assignments: Vec<String> = changes
            .iter()
            .map(|(column, _)| format!("{} = ?", column))
            .collect();
        let sql = format!(
            "UPDATE {} SET {}, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
            E::TABLE,
            assignments.join(", ")
        );

        let mut query = sqlx::query(&sql);
        for (_, arg) in changes {
            query = bind_query(query, arg);
        }
        query.bind(Utc::now()).bind(id).execute(&self.pool).await?;

        self.get_by_id(id).await
    }

    /// Soft delete. Unlike update there is no prior existence check: when the
    /// live-row filter matches nothing the call still reports success.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let sql = format!(
            "UPDATE {} SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL",
            E::TABLE
        );
        sqlx::query(&sql)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

fn bind_query<'q>(
    query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    arg: Arg,
) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
    match arg {
        Arg::Text(s) => query.bind(s),
        Arg::Int(i) => query.bind(i),
        Arg::Timestamp(t) => query.bind(t),
    }
}

fn bind_query_as<'q, O>(
    query: sqlx::query::QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    arg: Arg,
) -> sqlx::query::QueryAs<'q, Sqlite, O, SqliteArguments<'q>>
where
    O: for<'r> FromRow<'r, SqliteRow>,
{
    match arg {
        Arg::Text(s) => query.bind(s),
        Arg::Int(i) => query.bind(i),
        Arg::Timestamp(t) => query.bind(t),
    }
}
