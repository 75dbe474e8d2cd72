/// Task endpoints
///
/// - `GET    /api/projects/:project_id/tasks` - Tasks of a project (owner only)
/// - `POST   /api/projects/:project_id/tasks` - Create a task in a project (owner only)
/// - `PUT    /api/tasks/:task_id` - Partial update (project owner only)
/// - `DELETE /api/tasks/:task_id` - Delete a task (project owner only)

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::AppJson,
    routes::{trimmed, MessageResponse},
};
use axum::{extract::State, http::StatusCode, Extension};
use serde::{Deserialize, Serialize};
use taskboard_shared::{
    auth::authorization::{OwnedProject, OwnedTask},
    models::task::{CreateTask, Task, TaskStatus, UpdateTask},
};
use validator::Validate;

/// Create task request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(
        required(message = "Task name is required"),
        length(min = 1, max = 200, message = "Task name must be 1-200 characters")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Task description is required"),
        length(min = 1, message = "Task description is required")
    )]
    pub description: Option<String>,

    /// One of "To Do", "In Progress", "Done"; defaults to "To Do"
    pub status: Option<String>,
}

/// Partial task update
///
/// A `project_id` sent here is ignored; tasks never move between projects.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, max = 200, message = "Task name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Task description cannot be empty"))]
    pub description: Option<String>,

    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub task: Task,
}

fn parse_status(raw: Option<&str>) -> ApiResult<Option<TaskStatus>> {
    raw.map(|s| s.parse::<TaskStatus>())
        .transpose()
        .map_err(|e| ApiError::invalid_field("status", e.to_string()))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(OwnedProject(project)): Extension<OwnedProject>,
) -> ApiResult<AppJson<Vec<Task>>> {
    let tasks = state.store.list_tasks_by_project(project.id).await?;

    Ok(AppJson(tasks))
}

/// Creates a task in the guarded project
///
/// The project comes from the path, never from the body.
pub async fn create_task(
    State(state): State<AppState>,
    Extension(OwnedProject(project)): Extension<OwnedProject>,
    AppJson(req): AppJson<CreateTaskRequest>,
) -> ApiResult<(StatusCode, AppJson<Task>)> {
    let req = CreateTaskRequest {
        name: trimmed(req.name),
        description: req.description,
        status: req.status,
    };
    req.validate()?;

    let status = parse_status(req.status.as_deref())?.unwrap_or_default();
    let name = req
        .name
        .ok_or_else(|| ApiError::invalid_field("name", "Task name is required"))?;
    let description = req
        .description
        .ok_or_else(|| ApiError::invalid_field("description", "Task description is required"))?;

    let task = state
        .store
        .create_task(CreateTask {
            project_id: project.id,
            name,
            description,
            status,
        })
        .await?;

    tracing::info!(task_id = %task.id, project_id = %project.id, status = %task.status, "Task created");

    Ok((StatusCode::CREATED, AppJson(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Extension(OwnedTask(owned)): Extension<OwnedTask>,
    AppJson(req): AppJson<UpdateTaskRequest>,
) -> ApiResult<AppJson<TaskResponse>> {
    let req = UpdateTaskRequest {
        name: trimmed(req.name),
        description: req.description,
        status: req.status,
    };
    req.validate()?;

    let status = parse_status(req.status.as_deref())?;

    let task = state
        .store
        .update_task(
            owned.task.id,
            UpdateTask {
                name: req.name,
                description: req.description,
                status,
            },
        )
        .await?
        .ok_or_else(|| ApiError::vanished("task", owned.task.id))?;

    Ok(AppJson(TaskResponse { task }))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Extension(OwnedTask(owned)): Extension<OwnedTask>,
) -> ApiResult<AppJson<MessageResponse>> {
    if !state.store.delete_task(owned.task.id).await? {
        return Err(ApiError::vanished("task", owned.task.id));
    }

    tracing::info!(task_id = %owned.task.id, project_id = %owned.project.id, "Task deleted");

    Ok(AppJson(MessageResponse::new("Task deleted.")))
}
