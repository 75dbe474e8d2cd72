/// Identity layer for protected routes
///
/// Verifies the bearer token, confirms its subject still has an account, and
/// stores the caller's [`AuthContext`] in the request extensions. Requests
/// without a valid token never reach routing logic behind this layer.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use taskboard_shared::auth::middleware::{authenticate, AuthError};

use crate::{app::AppState, error::ApiError};

/// JWT authentication middleware layer
pub async fn jwt_auth_layer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_context = authenticate(req.headers(), state.jwt_secret()).map_err(|e| {
        tracing::debug!(error = %e, path = %req.uri().path(), "Rejected unauthenticated request");
        e
    })?;

    if state.store.find_user_by_id(auth_context.user_id).await?.is_none() {
        tracing::debug!(user_id = %auth_context.user_id, "Token subject has no account");
        return Err(AuthError::UnknownUser.into());
    }

    req.extensions_mut().insert(auth_context);

    Ok(next.run(req).await)
}
