/// Registration and login tests

mod common;

use axum::http::{Method, StatusCode};
use common::TestContext;
use serde_json::{json, Value};

async fn register(ctx: &TestContext, body: Value) -> (StatusCode, Value) {
    ctx.send(Method::POST, "/api/users/register", None, Some(body)).await
}

async fn login(ctx: &TestContext, body: Value) -> (StatusCode, Value) {
    ctx.send(Method::POST, "/api/users/login", None, Some(body)).await
}

#[tokio::test]
async fn test_register_then_use_token() {
    let ctx = TestContext::new();

    let (status, body) = register(
        &ctx,
        json!({ "username": "ada", "email": "Ada@Example.com", "password": "correct horse" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert!(body["user"].get("password_hash").is_none());

    let token = body["token"].as_str().unwrap();
    let (status, _) = ctx
        .send(
            Method::POST,
            "/api/projects",
            Some(token),
            Some(json!({ "name": "P1" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_register_validation() {
    let ctx = TestContext::new();

    let (status, _) = register(
        &ctx,
        json!({ "username": "ada", "email": "not-an-email", "password": "correct horse" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = register(
        &ctx,
        json!({ "username": "ada", "email": "ada@example.com", "password": "short" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], "password");

    let (status, _) = register(&ctx, json!({ "email": "ada@example.com" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let ctx = TestContext::new();
    let body = json!({ "username": "ada", "email": "ada@example.com", "password": "correct horse" });

    let (status, _) = register(&ctx, body.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = register(&ctx, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_login() {
    let ctx = TestContext::new();
    register(
        &ctx,
        json!({ "username": "ada", "email": "ada@example.com", "password": "correct horse" }),
    )
    .await;

    let (status, body) = login(
        &ctx,
        json!({ "email": "ada@example.com", "password": "correct horse" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["username"], "ada");

    let (status, wrong_password) = login(
        &ctx,
        json!({ "email": "ada@example.com", "password": "battery staple" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, unknown_email) = login(
        &ctx,
        json!({ "email": "nobody@example.com", "password": "correct horse" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password["message"], unknown_email["message"]);

    let (status, _) = login(&ctx, json!({ "email": "ada@example.com" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
