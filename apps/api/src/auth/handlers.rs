//! Axum route handlers for signup, login, and logout.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::extract::CurrentUser;
use crate::auth::password::{hash_password, verify_password};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub user_id: Uuid,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: Uuid,
    pub user_id: Uuid,
    pub username: String,
}

/// POST /api/v1/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    let username = request.username.trim();
    if username.is_empty() {
        return Err(AppError::Validation("username cannot be empty".to_string()));
    }
    if request.password.is_empty() {
        return Err(AppError::Validation("password cannot be empty".to_string()));
    }

    let password_hash = hash_password(&request.password)?;
    let user = state.users.create(username, &password_hash).await?;
    tracing::info!(username = %user.username, "account created");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            user_id: user.id,
            username: user.username,
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Credential check against the user directory; success issues a fresh
/// bearer token. Unknown usernames and bad passwords are indistinguishable
/// to the caller.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state
        .users
        .find_by_username(request.username.trim())
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(&request.password, &user.password_hash) {
        return Err(AppError::Unauthorized);
    }

    let token = state.sessions.create(&user.username).await;
    tracing::info!(username = %user.username, "login");

    Ok(Json(LoginResponse {
        token,
        user_id: user.id,
        username: user.username,
    }))
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<StatusCode, AppError> {
    state.sessions.revoke(current.token).await;
    Ok(StatusCode::NO_CONTENT)
}
