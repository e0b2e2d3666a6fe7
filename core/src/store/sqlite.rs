//! SQLite-backed todo store.
//!
//! # Design
//! Each operation is a single SQL statement. Delete and update use
//! `RETURNING` so the hit/miss decision and the write happen in one
//! round trip. A miss is simply an empty result set, never an error.
//! `creation_date` is stored as TEXT and decoded back into
//! `DateTime<Utc>` by sqlx's chrono support.

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::error::Error;
use crate::model::{NewTodo, Todo};

use super::TodoStore;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    creation_date TEXT NOT NULL
)";

const COLUMNS: &str = "id, title, description, completed, creation_date";

/// Todo store over a SQLite connection pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to `url` and create the todo table if it does not exist.
    pub async fn connect(url: &str) -> Result<Self, Error> {
        let pool = SqlitePool::connect(url).await?;
        sqlx::query(SCHEMA).execute(&pool).await?;
        tracing::debug!(url, "connected to sqlite");
        Ok(Self { pool })
    }

    /// A fresh, isolated in-memory database. The pool is capped at one
    /// connection: every SQLite `:memory:` connection is its own
    /// database, so a second connection would see an empty table.
    pub async fn in_memory() -> Result<Self, Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl TodoStore for SqliteStore {
    async fn insert(&self, todo: NewTodo) -> Result<Todo, Error> {
        let row = sqlx::query_as::<_, Todo>(&format!(
            "INSERT INTO todos (title, description, completed, creation_date) \
             VALUES (?1, ?2, ?3, ?4) RETURNING {COLUMNS}"
        ))
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed)
        .bind(todo.creation_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, Error> {
        let row = sqlx::query_as::<_, Todo>(&format!(
            "SELECT {COLUMNS} FROM todos WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn remove(&self, id: i64) -> Result<Option<Todo>, Error> {
        let row = sqlx::query_as::<_, Todo>(&format!(
            "DELETE FROM todos WHERE id = ?1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_completed(&self, id: i64, completed: bool) -> Result<Option<Todo>, Error> {
        let row = sqlx::query_as::<_, Todo>(&format!(
            "UPDATE todos SET completed = ?1 WHERE id = ?2 RETURNING {COLUMNS}"
        ))
        .bind(completed)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_all(&self) -> Result<Vec<Todo>, Error> {
        // No ORDER BY: listing order is not part of the contract.
        let rows = sqlx::query_as::<_, Todo>(&format!("SELECT {COLUMNS} FROM todos"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
