/// Registration and login
///
/// # Endpoints
///
/// - `POST /api/users/register` - Create an account, returns a token
/// - `POST /api/users/login` - Exchange credentials for a token
///
/// Both answer with `{ "token": "...", "user": { ... } }`; the password hash
/// never leaves the server.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::AppJson,
    routes::trimmed,
};
use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use taskboard_shared::{
    auth::{jwt, password},
    models::user::{CreateUser, User},
};
use validator::Validate;

const BAD_CREDENTIALS: &str = "Incorrect email or password";

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        required(message = "Username is required"),
        length(min = 1, max = 100, message = "Username must be 1-100 characters")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "Password is required"),
        length(min = 8, message = "Password must be at least 8 characters")
    )]
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required(message = "Email is required"))]
    pub email: Option<String>,

    #[validate(required(message = "Password is required"))]
    pub password: Option<String>,
}

/// Token plus the user it was issued for
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

fn issue_token(state: &AppState, user: User) -> ApiResult<AuthResponse> {
    let claims = jwt::Claims::new(user.id, user.email.clone(), state.config.token_lifetime());
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    Ok(AuthResponse { token, user })
}

/// Register a new user
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed or email already in use
/// - `500 Internal Server Error`: Server error
pub async fn register(
    State(state): State<AppState>,
    AppJson(req): AppJson<RegisterRequest>,
) -> ApiResult<(StatusCode, AppJson<AuthResponse>)> {
    let req = RegisterRequest {
        username: trimmed(req.username),
        email: trimmed(req.email).map(|e| e.to_lowercase()),
        password: req.password,
    };
    req.validate()?;

    let username = req
        .username
        .ok_or_else(|| ApiError::invalid_field("username", "Username is required"))?;
    let email = req
        .email
        .ok_or_else(|| ApiError::invalid_field("email", "Email is required"))?;
    let plain = req
        .password
        .ok_or_else(|| ApiError::invalid_field("password", "Password is required"))?;

    let password_hash = password::hash_password(&plain)?;

    let user = state
        .store
        .create_user(CreateUser {
            username,
            email,
            password_hash,
        })
        .await?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((StatusCode::CREATED, AppJson(issue_token(&state, user)?)))
}

/// Login endpoint
///
/// An unknown email and a wrong password produce the same 401.
///
/// # Errors
///
/// - `400 Bad Request`: Missing fields
/// - `401 Unauthorized`: Invalid credentials
pub async fn login(
    State(state): State<AppState>,
    AppJson(req): AppJson<LoginRequest>,
) -> ApiResult<AppJson<AuthResponse>> {
    req.validate()?;

    let email = req
        .email
        .ok_or_else(|| ApiError::invalid_field("email", "Email is required"))?
        .trim()
        .to_lowercase();
    let plain = req
        .password
        .ok_or_else(|| ApiError::invalid_field("password", "Password is required"))?;

    let Some(user) = state.store.find_user_by_email(&email).await? else {
        tracing::debug!("Login for unknown email");
        return Err(ApiError::Unauthorized(BAD_CREDENTIALS.to_string()));
    };

    if !password::verify_password(&plain, &user.password_hash)? {
        tracing::debug!(user_id = %user.id, "Login with wrong password");
        return Err(ApiError::Unauthorized(BAD_CREDENTIALS.to_string()));
    }

    Ok(AppJson(issue_token(&state, user)?))
}
