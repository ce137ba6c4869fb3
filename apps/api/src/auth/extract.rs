use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

/// Authenticated user resolved from `Authorization: Bearer <token>`.
/// Handlers take this as an argument to require a valid session.
pub struct CurrentUser {
    pub user: User,
    pub token: Uuid,
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = header
            .strip_prefix("Bearer ")
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
            .ok_or(AppError::Unauthorized)?;

        let username = state
            .sessions
            .resolve(token)
            .await
            .ok_or(AppError::Unauthorized)?;

        let user = state
            .users
            .find_by_username(&username)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Ok(CurrentUser { user, token })
    }
}
