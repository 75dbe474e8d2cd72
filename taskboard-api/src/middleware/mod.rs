/// Middleware modules for the API server
///
/// - `auth`: Bearer-token identity layer
/// - `ownership`: Project-owner and task-owner guards
/// - `security`: Security response headers

pub mod auth;
pub mod ownership;
pub mod security;
