/// In-memory store backend
///
/// Keeps users, projects and tasks in insertion-ordered vectors behind a
/// single `RwLock`. Each trait call takes the lock once, so like the Postgres
/// backend it offers no atomicity across calls.
///
/// Referential checks are limited to what the guard relies on: a task whose
/// project is gone is not returned by `find_task_with_project`.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Store, StoreError, StoreResult};
use crate::models::{
    project::{CreateProject, Project, UpdateProject},
    task::{CreateTask, Task, TaskWithProject, UpdateTask},
    user::{CreateUser, User},
};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    projects: Vec<Project>,
    tasks: Vec<Task>,
}

/// Store holding everything in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_user(&self, data: CreateUser) -> StoreResult<User> {
        let mut tables = self.tables.write().await;

        if tables.users.iter().any(|u| u.email == data.email) {
            return Err(StoreError::Conflict("Email already in use".to_string()));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: data.username,
            email: data.email,
            password_hash: data.password_hash,
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());

        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn create_project(&self, data: CreateProject) -> StoreResult<Project> {
        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            name: data.name,
            description: data.description,
            user_id: data.user_id,
            created_at: now,
            updated_at: now,
        };

        self.tables.write().await.projects.push(project.clone());
        Ok(project)
    }

    async fn find_project(&self, id: Uuid) -> StoreResult<Option<Project>> {
        let tables = self.tables.read().await;
        Ok(tables.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn list_projects_by_user(&self, user_id: Uuid) -> StoreResult<Vec<Project>> {
        let tables = self.tables.read().await;
        Ok(tables
            .projects
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_project(&self, id: Uuid, data: UpdateProject) -> StoreResult<Option<Project>> {
        let mut tables = self.tables.write().await;

        Ok(tables.projects.iter_mut().find(|p| p.id == id).map(|project| {
            data.apply_to(project);
            project.clone()
        }))
    }

    async fn delete_project(&self, id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.projects.len();
        tables.projects.retain(|p| p.id != id);
        Ok(tables.projects.len() < before)
    }

    async fn create_task(&self, data: CreateTask) -> StoreResult<Task> {
        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            name: data.name,
            description: data.description,
            status: data.status,
            project_id: data.project_id,
            created_at: now,
            updated_at: now,
        };

        self.tables.write().await.tasks.push(task.clone());
        Ok(task)
    }

    async fn find_task_with_project(&self, id: Uuid) -> StoreResult<Option<TaskWithProject>> {
        let tables = self.tables.read().await;

        let Some(task) = tables.tasks.iter().find(|t| t.id == id) else {
            return Ok(None);
        };

        Ok(tables
            .projects
            .iter()
            .find(|p| p.id == task.project_id)
            .map(|project| TaskWithProject {
                task: task.clone(),
                project: project.clone(),
            }))
    }

    async fn list_tasks_by_project(&self, project_id: Uuid) -> StoreResult<Vec<Task>> {
        let tables = self.tables.read().await;
        Ok(tables
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn update_task(&self, id: Uuid, data: UpdateTask) -> StoreResult<Option<Task>> {
        let mut tables = self.tables.write().await;

        Ok(tables.tasks.iter_mut().find(|t| t.id == id).map(|task| {
            data.apply_to(task);
            task.clone()
        }))
    }

    async fn delete_task(&self, id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.tasks.len();
        tables.tasks.retain(|t| t.id != id);
        Ok(tables.tasks.len() < before)
    }

    async fn delete_tasks_by_project(&self, project_id: Uuid) -> StoreResult<u64> {
        let mut tables = self.tables.write().await;
        let before = tables.tasks.len();
        tables.tasks.retain(|t| t.project_id != project_id);
        Ok((before - tables.tasks.len()) as u64)
    }
}
