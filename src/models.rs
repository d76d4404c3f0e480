use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::store::{Arg, Entity, Insertable, PartialUpdate};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    /// Set only by a successful login; each login overwrites the previous
    /// value.
    pub token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for User {
    const TABLE: &'static str = "users";
}

/// Request body for user create and update. Absent fields deserialize to
/// their defaults, which the update path treats as "not supplied".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl Insertable<User> for UserPayload {
    fn values(&self) -> Vec<(&'static str, Arg)> {
        vec![
            ("name", Arg::text(self.name.clone())),
            ("email", Arg::text(self.email.clone())),
            ("password", Arg::text(self.password.clone())),
        ]
    }
}

impl PartialUpdate<User> for UserPayload {
    fn changes(&self) -> Vec<(&'static str, Arg)> {
        let mut changes = Vec::new();
        if !self.name.is_empty() {
            changes.push(("name", Arg::text(self.name.clone())));
        }
        if !self.email.is_empty() {
            changes.push(("email", Arg::text(self.email.clone())));
        }
        if !self.password.is_empty() {
            changes.push(("password", Arg::text(self.password.clone())));
        }
        changes
    }
}

/// Writes the freshly issued bearer token onto a user row; login goes through
/// the regular update path rather than a dedicated statement.
#[derive(Debug)]
pub struct TokenPatch {
    pub token: String,
}

impl PartialUpdate<User> for TokenPatch {
    fn changes(&self) -> Vec<(&'static str, Arg)> {
        vec![("token", Arg::text(self.token.clone()))]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i64,
    /// Not an auth token; a denormalized leftover column kept for
    /// compatibility.
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for Book {
    const TABLE: &'static str = "books";
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub year: i64,
    #[serde(default)]
    pub token: String,
}

impl Insertable<Book> for BookPayload {
    fn values(&self) -> Vec<(&'static str, Arg)> {
        vec![
            ("title", Arg::text(self.title.clone())),
            ("author", Arg::text(self.author.clone())),
            ("year", Arg::Int(self.year)),
            ("token", Arg::text(self.token.clone())),
        ]
    }
}

impl PartialUpdate<Book> for BookPayload {
    fn changes(&self) -> Vec<(&'static str, Arg)> {
        let mut changes = Vec::new();
        if !self.title.is_empty() {
            changes.push(("title", Arg::text(self.title.clone())));
        }
        if !self.author.is_empty() {
            changes.push(("author", Arg::text(self.author.clone())));
        }
        if self.year != 0 {
            changes.push(("year", Arg::Int(self.year)));
        }
        if !self.token.is_empty() {
            changes.push(("token", Arg::text(self.token.clone())));
        }
        changes
    }
}
