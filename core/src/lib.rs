//! Core of the todo service: domain model, business rules, and the
//! storage abstraction they sit on.
//!
//! # Design
//! - `TodoService` is the only place validation lives. It rejects blank
//!   input before anything reaches the store and stamps new rows with an
//!   injected `Clock`, keeping creation-time assertions deterministic.
//! - `TodoStore` abstracts the todo table so the service runs against
//!   SQLite in production and an in-memory map under test.
//! - Absence (an unknown id) is a normal outcome modeled as `Option`;
//!   `Error` is reserved for invalid input and store faults.

pub mod error;
pub mod model;
pub mod service;
pub mod store;

pub use error::Error;
pub use model::{NewTodo, Todo};
pub use service::{Clock, SystemClock, TodoService};
pub use store::{MemoryStore, SqliteStore, TodoStore};
