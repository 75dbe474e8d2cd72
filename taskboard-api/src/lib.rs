//! # Taskboard API Server Library
//!
//! This crate provides the HTTP API for Taskboard: authenticated users manage
//! their own projects and the tasks inside them.
//!
//! ## Module Organization
//!
//! - `app`: Application state and router construction
//! - `config`: Configuration loading from the environment
//! - `error`: Error types and their HTTP mapping
//! - `extract`: Request extractors with API-shaped rejections
//! - `middleware`: Identity, ownership and security-header layers
//! - `routes`: Route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
