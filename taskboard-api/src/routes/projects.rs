/// Project endpoints
///
/// - `GET    /api/projects` - Caller's projects
/// - `POST   /api/projects` - Create a project owned by the caller
/// - `GET    /api/projects/:project_id` - One project (owner only)
/// - `PUT    /api/projects/:project_id` - Partial update (owner only)
/// - `DELETE /api/projects/:project_id` - Delete project and its tasks (owner only)
///
/// The `:project_id` routes run behind the project-owner guard and read the
/// already-loaded project from [`OwnedProject`].

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::AppJson,
    routes::{trimmed, MessageResponse},
};
use axum::{extract::State, http::StatusCode, Extension};
use serde::{Deserialize, Serialize};
use taskboard_shared::{
    auth::{authorization::OwnedProject, middleware::AuthContext},
    models::project::{CreateProject, Project, UpdateProject},
};
use validator::Validate;

/// Create project request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(
        required(message = "Project name is required"),
        length(min = 1, max = 200, message = "Project name must be 1-200 characters")
    )]
    pub name: Option<String>,

    pub description: Option<String>,
}

/// Partial project update
///
/// Ownership is not part of the body; a `user_id` sent here is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 200, message = "Project name must be 1-200 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub project: Project,
}

pub async fn list_projects(
    State(state): State<AppState>,
    auth: AuthContext,
) -> ApiResult<AppJson<Vec<Project>>> {
    let projects = state.store.list_projects_by_user(auth.user_id).await?;

    Ok(AppJson(projects))
}

pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthContext,
    AppJson(req): AppJson<CreateProjectRequest>,
) -> ApiResult<(StatusCode, AppJson<Project>)> {
    let req = CreateProjectRequest {
        name: trimmed(req.name),
        description: req.description,
    };
    req.validate()?;

    let name = req
        .name
        .ok_or_else(|| ApiError::invalid_field("name", "Project name is required"))?;

    let project = state
        .store
        .create_project(CreateProject {
            user_id: auth.user_id,
            name,
            description: req.description,
        })
        .await?;

    tracing::info!(project_id = %project.id, user_id = %auth.user_id, "Project created");

    Ok((StatusCode::CREATED, AppJson(project)))
}

pub async fn get_project(
    Extension(OwnedProject(project)): Extension<OwnedProject>,
) -> AppJson<ProjectResponse> {
    AppJson(ProjectResponse { project })
}

/// Applies a partial update
///
/// Fields missing from the body keep their stored values.
pub async fn update_project(
    State(state): State<AppState>,
    Extension(OwnedProject(project)): Extension<OwnedProject>,
    AppJson(req): AppJson<UpdateProjectRequest>,
) -> ApiResult<AppJson<ProjectResponse>> {
    let req = UpdateProjectRequest {
        name: trimmed(req.name),
        description: req.description,
    };
    req.validate()?;

    let updated = state
        .store
        .update_project(
            project.id,
            UpdateProject {
                name: req.name,
                description: req.description,
            },
        )
        .await?
        .ok_or_else(|| ApiError::vanished("project", project.id))?;

    Ok(AppJson(ProjectResponse { project: updated }))
}

/// Deletes the project, then every task in it
///
/// The two deletions are separate store calls. If the task deletion fails
/// the project is already gone; the failure is logged and reported as 500.
pub async fn delete_project(
    State(state): State<AppState>,
    Extension(OwnedProject(project)): Extension<OwnedProject>,
) -> ApiResult<AppJson<MessageResponse>> {
    if !state.store.delete_project(project.id).await? {
        return Err(ApiError::vanished("project", project.id));
    }

    let removed = state
        .store
        .delete_tasks_by_project(project.id)
        .await
        .map_err(|e| {
            tracing::error!(
                project_id = %project.id,
                error = %e,
                "Project deleted but its tasks could not be removed"
            );
            ApiError::from(e)
        })?;

    tracing::info!(project_id = %project.id, tasks_removed = removed, "Project deleted");

    Ok(AppJson(MessageResponse::new("Project and related tasks deleted.")))
}
