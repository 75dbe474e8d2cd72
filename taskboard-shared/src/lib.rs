//! # Taskboard Shared Library
//!
//! This crate contains the domain types, persistence layer and
//! authentication/authorization primitives used by the Taskboard API server.
//!
//! ## Module Organization
//!
//! - `models`: Users, projects and tasks with their Postgres queries
//! - `store`: The `Store` seam with Postgres and in-memory backends
//! - `auth`: Password hashing, JWT verification, request identity and the
//!   ownership guard
//! - `db`: Connection pool lifecycle and migrations

pub mod auth;
pub mod db;
pub mod models;
pub mod store;

/// Current version of the Taskboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
