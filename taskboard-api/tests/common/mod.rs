//! Common test utilities for integration tests
//!
//! Builds the full router over an in-memory store, so these tests need no
//! database. Users are seeded directly in the store and get a signed token.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use taskboard_api::{
    app::{build_router, AppState},
    config::{ApiConfig, Config, DatabaseConfig, JwtConfig},
};
use taskboard_shared::{
    auth::jwt::{create_token, Claims},
    models::user::CreateUser,
    store::{memory::MemoryStore, Store},
};
use tower::ServiceExt;
use uuid::Uuid;

pub const JWT_SECRET: &str = "integration-test-secret-at-least-32-bytes";

/// Seeded user with a valid bearer token
pub struct TestUser {
    pub id: Uuid,
    pub token: String,
}

/// Test context containing all necessary resources
pub struct TestContext {
    pub app: Router,
    pub store: Arc<dyn Store>,
}

pub fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["*".to_string()],
            production: false,
        },
        database: DatabaseConfig {
            url: String::new(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: JWT_SECRET.to_string(),
            expiration_hours: 2,
        },
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<dyn Store>) -> Self {
        let app = build_router(AppState::new(store.clone(), test_config()));
        Self { app, store }
    }

    /// Creates a user in the store and signs a token for it
    pub async fn create_user(&self, username: &str) -> TestUser {
        let user = self
            .store
            .create_user(CreateUser {
                username: username.to_string(),
                email: format!("{}-{}@example.com", username, Uuid::new_v4()),
                password_hash: "unused".to_string(),
            })
            .await
            .unwrap();

        let claims = Claims::new(user.id, user.email.clone(), chrono::Duration::hours(1));
        let token = create_token(&claims, JWT_SECRET).unwrap();

        TestUser { id: user.id, token }
    }

    /// Sends a request through the router and decodes the JSON body
    ///
    /// An empty body decodes to `Value::Null`.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    pub async fn get(&self, uri: &str, user: &TestUser) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(&user.token), None).await
    }

    pub async fn post(&self, uri: &str, user: &TestUser, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(&user.token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, user: &TestUser, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(&user.token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, user: &TestUser) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, Some(&user.token), None).await
    }

    /// Creates a project over HTTP and returns its id
    pub async fn create_project(&self, user: &TestUser, name: &str) -> String {
        let (status, body) = self
            .post(
                "/api/projects",
                user,
                serde_json::json!({ "name": name, "description": "d" }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["id"].as_str().unwrap().to_string()
    }

    /// Creates a task over HTTP and returns its id
    pub async fn create_task(&self, user: &TestUser, project_id: &str, name: &str) -> String {
        let (status, body) = self
            .post(
                &format!("/api/projects/{}/tasks", project_id),
                user,
                serde_json::json!({ "name": name, "description": "d" }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["id"].as_str().unwrap().to_string()
    }
}
