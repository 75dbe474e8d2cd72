/// Domain models for Taskboard
///
/// Each model carries its own Postgres queries as associated functions
/// taking a `&PgPool`. Handlers never call these directly; they go through
/// the [`Store`](crate::store::Store) trait so the same code runs against
/// the in-memory backend in tests.
///
/// # Models
///
/// - `user`: Accounts that own projects
/// - `project`: Projects owned by a single user
/// - `task`: Tasks belonging to a single project

pub mod project;
pub mod task;
pub mod user;
