//! In-memory todo store for unit tests.
//!
//! # Design
//! A map behind an async `RwLock`, with a monotonic counter standing in
//! for the database-assigned id. Operations never fail, which keeps the
//! service's validation and delegation logic testable without SQLite.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Error;
use crate::model::{NewTodo, Todo};

use super::TodoStore;

/// Todo store backed by a shared `HashMap`; ids start at 1.
#[derive(Clone, Default)]
pub struct MemoryStore {
    rows: Arc<RwLock<HashMap<i64, Todo>>>,
    next_id: Arc<AtomicI64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn insert(&self, todo: NewTodo) -> Result<Todo, Error> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let row = Todo {
            id,
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
            creation_date: todo.creation_date,
        };
        self.rows.write().await.insert(id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, Error> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn remove(&self, id: i64) -> Result<Option<Todo>, Error> {
        Ok(self.rows.write().await.remove(&id))
    }

    async fn update_completed(&self, id: i64, completed: bool) -> Result<Option<Todo>, Error> {
        let mut rows = self.rows.write().await;
        Ok(rows.get_mut(&id).map(|row| {
            row.completed = completed;
            row.clone()
        }))
    }

    async fn list_all(&self) -> Result<Vec<Todo>, Error> {
        Ok(self.rows.read().await.values().cloned().collect())
    }
}
