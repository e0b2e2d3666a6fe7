//! HTTP surface for the todo service.
//!
//! # Design
//! Handlers translate outcomes only: a service `Ok` becomes 200 with the
//! entity as JSON, an absent row becomes 404, rejected input becomes 400.
//! Business rules live in `todo_core::TodoService`; nothing here inspects
//! a todo beyond serializing it.

use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use todo_core::{Todo, TodoService};

mod error;

pub use error::ApiError;

/// Request payload for creating a todo.
///
/// Both fields are required by the service, but they deserialize as
/// `Option` here so a missing or `null` field reaches the service as
/// blank input (a 400) rather than tripping a body-shape rejection.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateParams {
    completed: bool,
}

pub fn app(service: TodoService) -> Router {
    Router::new()
        .route("/api/todo", post(create_todo))
        .route("/api/todo/{id}", delete(remove_todo).put(update_todo))
        .route("/api/todos", get(list_todos))
        .with_state(service)
}

pub async fn run(listener: TcpListener, service: TodoService) -> Result<(), std::io::Error> {
    axum::serve(listener, app(service)).await
}

async fn create_todo(
    State(service): State<TodoService>,
    Json(input): Json<CreateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let todo = service
        .create_todo(
            input.title.as_deref().unwrap_or_default(),
            input.description.as_deref().unwrap_or_default(),
        )
        .await?;
    tracing::info!(id = todo.id, "created todo");
    Ok(Json(todo))
}

async fn remove_todo(
    State(service): State<TodoService>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, ApiError> {
    let todo = service.remove_todo(id).await?.ok_or(ApiError::NotFound)?;
    tracing::info!(id, "deleted todo");
    Ok(Json(todo))
}

async fn update_todo(
    State(service): State<TodoService>,
    Path(id): Path<i64>,
    Query(params): Query<UpdateParams>,
) -> Result<Json<Todo>, ApiError> {
    let todo = service
        .update_todo(id, params.completed)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(id, completed = params.completed, "updated todo");
    Ok(Json(todo))
}

async fn list_todos(State(service): State<TodoService>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(service.get_all_todos().await?))
}
