//! Storage abstraction over the todo table.
//!
//! # Design
//! `TodoStore` is the seam between business rules and persistence: the
//! service holds it as a trait object so tests can swap the SQLite
//! implementation for an in-memory map. A missing row is reported as
//! `Ok(None)`, never as an error; `Err` is reserved for store faults.

use async_trait::async_trait;

use crate::error::Error;
use crate::model::{NewTodo, Todo};

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Row-level operations over the todo table.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Persist `todo`, letting the store assign the id. Returns the row
    /// as stored.
    async fn insert(&self, todo: NewTodo) -> Result<Todo, Error>;

    /// Look up a row by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, Error>;

    /// Delete the row with this id and return its last stored state.
    async fn remove(&self, id: i64) -> Result<Option<Todo>, Error>;

    /// Set `completed` on the row with this id, leaving every other
    /// column untouched, and return the updated row.
    async fn update_completed(&self, id: i64, completed: bool) -> Result<Option<Todo>, Error>;

    /// Every row in the table. Order is unspecified.
    async fn list_all(&self) -> Result<Vec<Todo>, Error>;
}
