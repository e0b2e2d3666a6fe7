//! Error types for the todo core.
//!
//! # Design
//! Only two failure categories exist here: invalid input on create and
//! store faults. "Not found" is deliberately not an error: the store
//! reports a missing row as `Ok(None)` and callers treat absence as a
//! normal outcome.

use thiserror::Error;

/// Errors surfaced by `TodoService` and `TodoStore`.
#[derive(Debug, Error)]
pub enum Error {
    /// The title was missing, empty, or whitespace-only.
    #[error("title must not be blank")]
    BlankTitle,

    /// The description was missing, empty, or whitespace-only.
    #[error("description must not be blank")]
    BlankDescription,

    /// The backing store failed. Not retried or recovered at this layer;
    /// the boundary maps it to a 500-class response.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Error {
    /// True for input-validation failures, false for store faults.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::BlankTitle | Error::BlankDescription)
    }
}
