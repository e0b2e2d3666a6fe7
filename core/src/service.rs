//! Business rules for the todo service.
//!
//! # Design
//! `TodoService` is the only component that validates input; everything
//! else is delegation to the store. It holds the store and clock as
//! `Arc` trait objects so handlers can clone it cheaply and tests can
//! inject an in-memory store and a fixed instant.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::Error;
use crate::model::{NewTodo, Todo};
use crate::store::TodoStore;

/// Source of the current instant, injected so tests can pin time.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Validates inputs and orchestrates store calls. Stateless beyond its
/// collaborators; `Clone` shares them.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
    clock: Arc<dyn Clock>,
}

impl TodoService {
    pub fn new(store: impl TodoStore) -> Self {
        Self::with_clock(store, SystemClock)
    }

    pub fn with_clock(store: impl TodoStore, clock: impl Clock) -> Self {
        Self {
            store: Arc::new(store),
            clock: Arc::new(clock),
        }
    }

    /// Validate and persist a new todo.
    ///
    /// `title` is checked before `description`; a blank or
    /// whitespace-only value in either rejects the request before
    /// anything reaches the store. On success the row starts with
    /// `completed = false` and `creation_date` at the clock's current
    /// UTC instant.
    pub async fn create_todo(&self, title: &str, description: &str) -> Result<Todo, Error> {
        if title.trim().is_empty() {
            return Err(Error::BlankTitle);
        }
        if description.trim().is_empty() {
            return Err(Error::BlankDescription);
        }

        self.store
            .insert(NewTodo {
                title: title.to_string(),
                description: description.to_string(),
                completed: false,
                creation_date: self.clock.now(),
            })
            .await
    }

    /// Delete a todo and return its last stored state, or `None` if the
    /// id is unknown.
    pub async fn remove_todo(&self, id: i64) -> Result<Option<Todo>, Error> {
        self.store.remove(id).await
    }

    /// Set the `completed` flag, leaving every other field untouched.
    /// Returns `None` if the id is unknown.
    pub async fn update_todo(&self, id: i64, completed: bool) -> Result<Option<Todo>, Error> {
        self.store.update_completed(id, completed).await
    }

    pub async fn get_all_todos(&self) -> Result<Vec<Todo>, Error> {
        self.store.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    /// Clock pinned to a known instant.
    #[derive(Clone, Copy)]
    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn service() -> TodoService {
        TodoService::with_clock(MemoryStore::new(), FixedClock(fixed_instant()))
    }

    #[tokio::test]
    async fn create_todo_starts_incomplete_with_clock_timestamp() {
        let service = service();
        let todo = service.create_todo("Buy milk", "2%").await.unwrap();

        assert!(todo.id > 0);
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description, "2%");
        assert!(!todo.completed);
        assert_eq!(todo.creation_date, fixed_instant());
    }

    #[tokio::test]
    async fn create_todo_assigns_unique_ids() {
        let service = service();
        let a = service.create_todo("First", "one").await.unwrap();
        let b = service.create_todo("Second", "two").await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn create_todo_with_system_clock_is_near_now_utc() {
        let service = TodoService::new(MemoryStore::new());
        let todo = service.create_todo("Timed", "check").await.unwrap();
        let delta = Utc::now() - todo.creation_date;
        assert!(delta.num_seconds().abs() < 5);
    }

    #[tokio::test]
    async fn create_todo_rejects_blank_title() {
        let service = service();
        for title in ["", "   ", "\t\n"] {
            let err = service.create_todo(title, "fine").await.unwrap_err();
            assert!(matches!(err, Error::BlankTitle), "title {title:?}");
        }
    }

    #[tokio::test]
    async fn create_todo_rejects_blank_description() {
        let service = service();
        for description in ["", "   ", "\t\n"] {
            let err = service.create_todo("fine", description).await.unwrap_err();
            assert!(matches!(err, Error::BlankDescription), "description {description:?}");
        }
    }

    #[tokio::test]
    async fn create_todo_checks_title_before_description() {
        let service = service();
        let err = service.create_todo("", "").await.unwrap_err();
        assert!(matches!(err, Error::BlankTitle));
    }

    #[tokio::test]
    async fn rejected_create_persists_nothing() {
        let service = service();
        service.create_todo("", "fine").await.unwrap_err();
        service.create_todo("fine", "  ").await.unwrap_err();
        assert!(service.get_all_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_todo_returns_snapshot_and_deletes() {
        let service = service();
        let created = service.create_todo("Gone soon", "bye").await.unwrap();

        let removed = service.remove_todo(created.id).await.unwrap().unwrap();
        assert_eq!(removed, created);
        assert!(service.get_all_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_todo_unknown_id_is_none() {
        let service = service();
        assert!(service.remove_todo(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_todo_changes_only_completed() {
        let service = service();
        let created = service.create_todo("Flip me", "please").await.unwrap();

        let updated = service.update_todo(created.id, true).await.unwrap().unwrap();
        assert!(updated.completed);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.creation_date, created.creation_date);
    }

    #[tokio::test]
    async fn update_todo_is_idempotent() {
        let service = service();
        let created = service.create_todo("Twice", "over").await.unwrap();

        let first = service.update_todo(created.id, true).await.unwrap().unwrap();
        let second = service.update_todo(created.id, true).await.unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn update_todo_can_reopen() {
        let service = service();
        let created = service.create_todo("Back", "forth").await.unwrap();

        service.update_todo(created.id, true).await.unwrap().unwrap();
        let reopened = service.update_todo(created.id, false).await.unwrap().unwrap();
        assert!(!reopened.completed);
    }

    #[tokio::test]
    async fn update_todo_unknown_id_is_none() {
        let service = service();
        assert!(service.update_todo(999, true).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_all_todos_returns_every_row() {
        let service = service();
        let a = service.create_todo("A", "a").await.unwrap();
        let b = service.create_todo("B", "b").await.unwrap();

        let todos = service.get_all_todos().await.unwrap();
        assert_eq!(todos.len(), 2);
        assert!(todos.contains(&a));
        assert!(todos.contains(&b));
    }
}
