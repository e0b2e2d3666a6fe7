//! The todo entity and its pre-insert shape.
//!
//! # Design
//! `Todo` doubles as the database row (`sqlx::FromRow`) and the wire
//! representation: the JSON surface uses camelCase, so `creation_date`
//! serializes as `creationDate` with chrono's RFC 3339 formatting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted todo row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Assigned by the store on insert; immutable thereafter.
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    /// Set once at creation, always UTC, never mutated.
    pub creation_date: DateTime<Utc>,
}

/// A todo row before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub creation_date: DateTime<Utc>,
}
