pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::auth::handlers as auth;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("no such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    // Headroom over the file limit for multipart framing
    let body_limit = state.config.max_upload_bytes + 64 * 1024;

    Router::new()
        .route("/health", get(health::health_handler))
        // Accounts
        .route("/api/v1/auth/signup", post(auth::handle_signup))
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        // Analysis
        .route("/api/v1/skills", get(analysis::handle_list_skills))
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .fallback(not_found)
        .with_state(state)
}
