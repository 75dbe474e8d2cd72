/// Ownership guard layers
///
/// Applied with `route_layer` to routes carrying a resource id. Each guard
/// resolves the id from the path, checks it against the caller, and on
/// success inserts the loaded resource into the request extensions as
/// [`OwnedProject`] or [`OwnedTask`]. On failure the request short-circuits
/// with 404 (unknown id) or 403 (someone else's resource).
///
/// Both guards must sit inside the identity layer; without an
/// [`AuthContext`] they reject with 401.

use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};
use taskboard_shared::auth::{
    authorization::{authorize_project_access, authorize_task_access, OwnedProject, OwnedTask},
    middleware::AuthContext,
};

use crate::{app::AppState, error::ApiError};

/// Lets the request through only if the caller owns `:project_id`
pub async fn require_project_owner(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    auth: AuthContext,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let project = authorize_project_access(state.store.as_ref(), &auth, &project_id).await?;

    req.extensions_mut().insert(OwnedProject(project));

    Ok(next.run(req).await)
}

/// Lets the request through only if the caller owns the project of `:task_id`
pub async fn require_task_owner(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    auth: AuthContext,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let task = authorize_task_access(state.store.as_ref(), &auth, &task_id).await?;

    req.extensions_mut().insert(OwnedTask(task));

    Ok(next.run(req).await)
}

