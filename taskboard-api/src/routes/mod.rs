/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: Registration and login
/// - `projects`: Project CRUD
/// - `tasks`: Task CRUD

pub mod health;
pub mod projects;
pub mod tasks;
pub mod users;

use serde::{Deserialize, Serialize};

/// Body for operations that only report what happened
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Trims a text field, keeping `None` as `None`
pub(crate) fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}
