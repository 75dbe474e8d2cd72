/// Database layer for Taskboard
///
/// # Modules
///
/// - `pool`: PostgreSQL pool lifecycle (open with health check, close at shutdown)
/// - `migrations`: Embedded schema migrations
///
/// Query functions live with their models in the `models` module.

pub mod migrations;
pub mod pool;
