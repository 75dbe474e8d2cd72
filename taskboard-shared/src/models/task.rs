/// Task model and database operations
///
/// Tasks belong to a project (`project_id`) and carry no owner of their own.
/// Whoever owns the project owns its tasks, so anything that needs the owner
/// loads a [`TaskWithProject`] instead of reading a field off the task.
///
/// # Status
///
/// ```text
/// "To Do" (default) | "In Progress" | "Done"
/// ```
///
/// Any other value is rejected before it reaches the database.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE task_status AS ENUM ('To Do', 'In Progress', 'Done');
///
/// CREATE TABLE tasks (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(255) NOT NULL CHECK (btrim(name) <> ''),
///     description TEXT NOT NULL,
///     status task_status NOT NULL DEFAULT 'To Do',
///     project_id UUID NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::project::Project;

/// Task status
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "task_status")]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "To Do")]
    #[sqlx(rename = "To Do")]
    ToDo,

    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,

    #[serde(rename = "Done")]
    #[sqlx(rename = "Done")]
    Done,
}

impl TaskStatus {
    /// All accepted values, in workflow order
    pub const ALL: [TaskStatus; 3] = [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done];

    /// Wire and database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a status outside the accepted set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a valid status; expected one of \"To Do\", \"In Progress\", \"Done\"")]
pub struct InvalidTaskStatus(pub String);

impl FromStr for TaskStatus {
    type Err = InvalidTaskStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InvalidTaskStatus(s.to_string()))
    }
}

/// Task belonging to a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID
    pub id: Uuid,

    /// Task name (trimmed, non-empty)
    pub name: String,

    pub description: String,

    pub status: TaskStatus,

    /// Parent project, fixed at creation
    pub project_id: Uuid,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A task fetched together with the project it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct TaskWithProject {
    pub task: Task,
    pub project: Project,
}

impl TaskWithProject {
    /// Effective owner of the task, resolved through its project
    pub fn owner_id(&self) -> Uuid {
        self.project.user_id
    }
}

/// Input for creating a new task
#[derive(Debug, Clone)]
pub struct CreateTask {
    /// Parent project, always taken from the request path
    pub project_id: Uuid,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
}

/// Partial update for a task
///
/// Only `Some` fields are written. There is no `project_id` here: a task
/// cannot be moved to another project, and so cannot change owner.
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

impl UpdateTask {
    /// Applies the present fields to an in-memory task
    pub fn apply_to(self, task: &mut Task) {
        if let Some(name) = self.name {
            task.name = name;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        task.updated_at = Utc::now();
    }
}

/// Flat row for the task/project join; column names are prefixed to avoid
/// collisions between the two tables.
#[derive(sqlx::FromRow)]
struct TaskProjectRow {
    task_id: Uuid,
    task_name: String,
    task_description: String,
    task_status: TaskStatus,
    task_project_id: Uuid,
    task_created_at: DateTime<Utc>,
    task_updated_at: DateTime<Utc>,
    project_id: Uuid,
    project_name: String,
    project_description: Option<String>,
    project_user_id: Uuid,
    project_created_at: DateTime<Utc>,
    project_updated_at: DateTime<Utc>,
}

impl From<TaskProjectRow> for TaskWithProject {
    fn from(row: TaskProjectRow) -> Self {
        TaskWithProject {
            task: Task {
                id: row.task_id,
                name: row.task_name,
                description: row.task_description,
                status: row.task_status,
                project_id: row.task_project_id,
                created_at: row.task_created_at,
                updated_at: row.task_updated_at,
            },
            project: Project {
                id: row.project_id,
                name: row.project_name,
                description: row.project_description,
                user_id: row.project_user_id,
                created_at: row.project_created_at,
                updated_at: row.project_updated_at,
            },
        }
    }
}

impl Task {
    /// Creates a new task
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (name, description, status, project_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, status, project_id, created_at, updated_at
            "#,
        )
        .bind(data.name)
        .bind(data.description)
        .bind(data.status)
        .bind(data.project_id)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task and its project in one query
    ///
    /// Returns `None` when the task is absent, or when its project no longer
    /// exists (an orphan has no owner and cannot be authorized).
    pub async fn find_with_project(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<Option<TaskWithProject>, sqlx::Error> {
        let row = sqlx::query_as::<_, TaskProjectRow>(
            r#"
            SELECT t.id AS task_id,
                   t.name AS task_name,
                   t.description AS task_description,
                   t.status AS task_status,
                   t.project_id AS task_project_id,
                   t.created_at AS task_created_at,
                   t.updated_at AS task_updated_at,
                   p.id AS project_id,
                   p.name AS project_name,
                   p.description AS project_description,
                   p.user_id AS project_user_id,
                   p.created_at AS project_created_at,
                   p.updated_at AS project_updated_at
            FROM tasks t
            INNER JOIN projects p ON p.id = t.project_id
            WHERE t.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(TaskWithProject::from))
    }

    /// Lists all tasks of a project, oldest first
    pub async fn list_by_project(pool: &PgPool, project_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, name, description, status, project_id, created_at, updated_at
            FROM tasks
            WHERE project_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(project_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Applies a partial update
    ///
    /// # Returns
    ///
    /// The updated task, or `None` if it no longer exists
    pub async fn update(pool: &PgPool, id: Uuid, data: UpdateTask) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, status, project_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(data.name)
        .bind(data.description)
        .bind(data.status)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Deletes a single task
    ///
    /// # Returns
    ///
    /// `true` if a row was deleted
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes every task of a project
    ///
    /// # Returns
    ///
    /// Number of tasks deleted
    pub async fn delete_by_project(pool: &PgPool, project_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE project_id = $1")
            .bind(project_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
