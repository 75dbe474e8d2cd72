/// Persistence seam
///
/// Handlers and the ownership guard talk to storage only through the
/// [`Store`] trait. Two backends implement it:
///
/// - [`postgres::PgStore`]: production backend over a `sqlx` connection pool
/// - [`memory::MemoryStore`]: process-local maps, used by tests
///
/// Every method is a single round-trip. Nothing here opens a transaction, so
/// a guard check followed by a mutation is two independent operations.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use taskboard_shared::store::{memory::MemoryStore, Store};
///
/// let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
/// ```

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{
    project::{CreateProject, Project, UpdateProject},
    task::{CreateTask, Task, TaskWithProject, UpdateTask},
    user::{CreateUser, User},
};

pub mod memory;
pub mod postgres;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness rule was violated (e.g. duplicate email)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Find/create/update/delete operations over users, projects and tasks
#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Short backend name for logs and health output
    fn backend(&self) -> &'static str;

    /// Verifies the backend is reachable
    async fn ping(&self) -> StoreResult<()>;

    async fn create_user(&self, data: CreateUser) -> StoreResult<User>;

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    async fn create_project(&self, data: CreateProject) -> StoreResult<Project>;

    async fn find_project(&self, id: Uuid) -> StoreResult<Option<Project>>;

    async fn list_projects_by_user(&self, user_id: Uuid) -> StoreResult<Vec<Project>>;

    /// Returns `None` if the project does not exist
    async fn update_project(&self, id: Uuid, data: UpdateProject) -> StoreResult<Option<Project>>;

    /// Removes the project row only; returns `false` if it did not exist
    async fn delete_project(&self, id: Uuid) -> StoreResult<bool>;

    async fn create_task(&self, data: CreateTask) -> StoreResult<Task>;

    /// Fetches a task joined with its project
    async fn find_task_with_project(&self, id: Uuid) -> StoreResult<Option<TaskWithProject>>;

    async fn list_tasks_by_project(&self, project_id: Uuid) -> StoreResult<Vec<Task>>;

    /// Returns `None` if the task does not exist
    async fn update_task(&self, id: Uuid, data: UpdateTask) -> StoreResult<Option<Task>>;

    /// Returns `false` if the task did not exist
    async fn delete_task(&self, id: Uuid) -> StoreResult<bool>;

    /// Removes every task of a project, returning how many were removed
    async fn delete_tasks_by_project(&self, project_id: Uuid) -> StoreResult<u64>;
}
