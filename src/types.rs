//! Core types for the Task REST API.

use serde::{Deserialize, Serialize};

/// A task row as stored in the database and returned by list-all.
///
/// The wire name for `description` is `desc`, inherited from the original
/// API contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub completed: bool,
}

/// Request body for POST /create-task.
///
/// Fields default to empty so a missing `title` surfaces as a validation
/// error with a stable message rather than a serde decode error.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "desc", default)]
    pub description: String,
}

/// Request body for PUT /update-task. `title` selects the row; only
/// `description` and `completed` are mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "desc", default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// Response body for POST /create-task.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTaskResponse {
    pub title: String,
    pub message: String,
}

/// Response body for GET /get-task. Only the description of the matched
/// task is returned, not the full entity.
#[derive(Debug, Clone, Serialize)]
pub struct GetTaskResponse {
    pub description: String,
}

/// Response body for PUT /update-task.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTaskResponse {
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub completed: bool,
    pub message: String,
}

/// Response body for DELETE /delete-task.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteTaskResponse {
    pub message: String,
}
