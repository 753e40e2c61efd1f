//! HTTP server for the task API.
//!
//! This module provides the axum-based HTTP server: one stateless handler
//! per endpoint, each mapping a request to a single database operation and
//! a JSON response. Wrong-method requests are answered with 405 by axum's
//! method routing.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    routing::{delete, get, post, put},
};
use serde::Deserialize;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::db::Database;
use crate::error::ApiError;
use crate::types::{
    CreateTaskRequest, CreateTaskResponse, DeleteTaskResponse, GetTaskResponse, Task,
    UpdateTaskRequest, UpdateTaskResponse,
};

/// Server state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Injected database handle, constructed once in main.
    db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// Create success message, inherited verbatim from the original API
/// contract (Russian while the other messages are English).
const CREATE_SUCCESS_MESSAGE: &str = "Задача успешно создана!";

/// POST /create-task - insert a new task with the store-default completed
/// flag and echo the title back.
async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<Json<CreateTaskResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::validation(rejection.body_text()))?;

    if request.title.is_empty() {
        return Err(ApiError::validation("required fields are missing: title"));
    }

    let id = state
        .db
        .insert_task(&request.title, &request.description)
        .map_err(|e| {
            warn!(error = %e, title = %request.title, "task insert failed");
            ApiError::internal("failed to create task")
        })?;
    info!(id, title = %request.title, "task created");

    Ok(Json(CreateTaskResponse {
        title: request.title,
        message: CREATE_SUCCESS_MESSAGE.to_string(),
    }))
}

/// Query parameters for GET /get-task.
#[derive(Debug, Deserialize)]
struct GetTaskParams {
    title: Option<String>,
}

/// GET /get-task?title= - look up a task by title and return only its
/// description.
async fn get_task(
    State(state): State<AppState>,
    Query(params): Query<GetTaskParams>,
) -> Result<Json<GetTaskResponse>, ApiError> {
    let title = params
        .title
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::validation("missing title parameter"))?;

    let task = state.db.get_task_by_title(&title).map_err(|e| {
        warn!(error = %e, title = %title, "task lookup failed");
        ApiError::internal("failed to retrieve task from database")
    })?;

    let task = task.ok_or_else(|| ApiError::not_found("task not found"))?;

    Ok(Json(GetTaskResponse {
        description: task.description,
    }))
}

/// GET /get-all-tasks - return every task ordered by id; an empty store
/// yields an empty array.
async fn get_all_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.db.list_tasks().map_err(|e| {
        warn!(error = %e, "task list failed");
        ApiError::internal("failed to retrieve tasks from database")
    })?;

    Ok(Json(tasks))
}

/// PUT /update-task - set description and completed on the task matching
/// the given title. The title itself is the lookup key and is not mutated.
async fn update_task(
    State(state): State<AppState>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<UpdateTaskResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::validation(rejection.body_text()))?;

    if request.title.is_empty() {
        return Err(ApiError::validation("title is required, but empty"));
    }

    let updated_id = state
        .db
        .update_task_by_title(&request.title, &request.description, request.completed)
        .map_err(|e| {
            warn!(error = %e, title = %request.title, "task update failed");
            ApiError::internal("failed to update task")
        })?;

    let updated_id = updated_id.ok_or_else(|| ApiError::not_found("task not found"))?;
    info!(id = updated_id, title = %request.title, "task updated");

    Ok(Json(UpdateTaskResponse {
        message: format!(
            "task '{}' (ID: {}) updated successfully.",
            request.title, updated_id
        ),
        title: request.title,
        description: request.description,
        completed: request.completed,
    }))
}

/// Query parameters for DELETE /delete-task.
#[derive(Debug, Deserialize)]
struct DeleteTaskParams {
    id: Option<String>,
}

/// DELETE /delete-task?id= - delete the task with the given numeric id.
async fn delete_task(
    State(state): State<AppState>,
    Query(params): Query<DeleteTaskParams>,
) -> Result<Json<DeleteTaskResponse>, ApiError> {
    let id = params
        .id
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::validation("id parameter is required, but empty"))?;

    let id: i64 = id
        .parse()
        .map_err(|_| ApiError::validation("invalid id format"))?;

    let deleted_id = state.db.delete_task(id).map_err(|e| {
        warn!(error = %e, id, "task delete failed");
        ApiError::internal("Failed to delete task from database")
    })?;

    let deleted_id = deleted_id.ok_or_else(|| ApiError::not_found("Task not found"))?;
    info!(id = deleted_id, "task deleted");

    Ok(Json(DeleteTaskResponse {
        message: format!("Task with '{}' id was deleted", deleted_id),
    }))
}

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/create-task", post(create_task))
        .route("/get-task", get(get_task))
        .route("/get-all-tasks", get(get_all_tasks))
        .route("/update-task", put(update_task))
        .route("/delete-task", delete(delete_task))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener and serve requests until the process exits.
pub async fn run(db: Database, addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_router(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
