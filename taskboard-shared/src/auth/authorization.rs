/// Ownership guard for projects and tasks
///
/// # Ownership chain
///
/// ```text
/// User ──owns──> Project ──contains──> Task
/// ```
///
/// A project is owned by `project.user_id`. A task has no owner field; its
/// owner is the owner of its project, so the task check always loads the
/// task joined with its project and compares against the project.
///
/// # Outcomes
///
/// | Situation                          | Result                           |
/// |------------------------------------|----------------------------------|
/// | caller owns the resource           | `Ok(resource)`                   |
/// | id malformed or not in the store   | `ProjectNotFound`/`TaskNotFound` |
/// | resource exists, other owner       | `NotProjectOwner`/`NotTaskOwner` |
/// | store failure                      | `Store(_)`                       |
///
/// Existence is checked before ownership, so a non-owner can tell a missing
/// id (404) from someone else's resource (403).
///
/// The guard is a function of the store contents at call time. It does not
/// lock anything; a mutation performed after a successful check may still
/// find the resource gone.
///
/// # Example
///
/// ```
/// use taskboard_shared::auth::authorization::{authorize_project_access, AuthzError};
/// use taskboard_shared::auth::middleware::AuthContext;
/// use taskboard_shared::models::project::CreateProject;
/// use taskboard_shared::store::{memory::MemoryStore, Store};
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MemoryStore::new();
/// let alice = AuthContext::new(Uuid::new_v4(), "alice@example.com");
/// let project = store.create_project(CreateProject {
///     user_id: alice.user_id,
///     name: "P1".to_string(),
///     description: None,
/// }).await?;
///
/// let allowed = authorize_project_access(&store, &alice, &project.id.to_string()).await?;
/// assert_eq!(allowed.id, project.id);
///
/// let bob = AuthContext::new(Uuid::new_v4(), "bob@example.com");
/// let denied = authorize_project_access(&store, &bob, &project.id.to_string()).await;
/// assert!(matches!(denied, Err(AuthzError::NotProjectOwner)));
/// # Ok(())
/// # }
/// ```

use tracing::debug;
use uuid::Uuid;

use super::middleware::AuthContext;
use crate::models::{project::Project, task::TaskWithProject};
use crate::store::{Store, StoreError};

/// Error type for ownership checks
#[derive(Debug, thiserror::Error)]
pub enum AuthzError {
    #[error("No project found with this id.")]
    ProjectNotFound,

    #[error("No task found with this id.")]
    TaskNotFound,

    #[error("User is not authorized to access this project.")]
    NotProjectOwner,

    #[error("User is not authorized to access this task.")]
    NotTaskOwner,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl AuthzError {
    /// True for the "doesn't exist" outcomes
    pub fn is_not_found(&self) -> bool {
        matches!(self, AuthzError::ProjectNotFound | AuthzError::TaskNotFound)
    }

    /// True for the "exists but belongs to someone else" outcomes
    pub fn is_denied(&self) -> bool {
        matches!(self, AuthzError::NotProjectOwner | AuthzError::NotTaskOwner)
    }
}

/// Project the caller has been verified to own
///
/// Inserted into the request extensions by the project-owner guard layer so
/// handlers reuse the lookup instead of repeating it.
#[derive(Debug, Clone)]
pub struct OwnedProject(pub Project);

/// Task (with its project) the caller has been verified to own
#[derive(Debug, Clone)]
pub struct OwnedTask(pub TaskWithProject);

/// Checks that `auth` owns the project identified by `project_id`
///
/// `project_id` is the raw path segment. An id that does not parse as a UUID
/// cannot exist in the store and is reported as not found.
pub async fn authorize_project_access(
    store: &dyn Store,
    auth: &AuthContext,
    project_id: &str,
) -> Result<Project, AuthzError> {
    let Ok(id) = Uuid::parse_str(project_id) else {
        debug!(project_id, "Malformed project id");
        return Err(AuthzError::ProjectNotFound);
    };

    let project = store
        .find_project(id)
        .await?
        .ok_or(AuthzError::ProjectNotFound)?;

    if project.user_id != auth.user_id {
        debug!(
            project_id = %project.id,
            owner_id = %project.user_id,
            user_id = %auth.user_id,
            "Project access denied"
        );
        return Err(AuthzError::NotProjectOwner);
    }

    Ok(project)
}

/// Checks that `auth` owns the task identified by `task_id`
///
/// The task is fetched joined with its project and ownership is decided on
/// the project's owner.
pub async fn authorize_task_access(
    store: &dyn Store,
    auth: &AuthContext,
    task_id: &str,
) -> Result<TaskWithProject, AuthzError> {
    let Ok(id) = Uuid::parse_str(task_id) else {
        debug!(task_id, "Malformed task id");
        return Err(AuthzError::TaskNotFound);
    };

    let joined = store
        .find_task_with_project(id)
        .await?
        .ok_or(AuthzError::TaskNotFound)?;

    if joined.owner_id() != auth.user_id {
        debug!(
            task_id = %joined.task.id,
            project_id = %joined.project.id,
            owner_id = %joined.owner_id(),
            user_id = %auth.user_id,
            "Task access denied"
        );
        return Err(AuthzError::NotTaskOwner);
    }

    Ok(joined)
}
