mod analysis;
mod auth;
mod config;
mod errors;
mod models;
mod repository;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::pipeline::Analyzer;
use crate::analysis::recommend::RecommendationTable;
use crate::analysis::vocabulary::{MatchMode, SkillVocabulary};
use crate::auth::session::SessionStore;
use crate::config::Config;
use crate::repository::{InMemoryUserRepository, UserRepository};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (every knob has a default)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Vocabulary and recommendation table are configuration data: JSON files
    // with compiled-in defaults.
    let vocabulary = match &config.vocabulary_path {
        Some(path) => SkillVocabulary::load(Path::new(path))?,
        None => SkillVocabulary::builtin()?,
    };
    info!("Skill vocabulary loaded ({} entries)", vocabulary.len());

    let table = match &config.recommendations_path {
        Some(path) => RecommendationTable::load(Path::new(path))?,
        None => RecommendationTable::builtin()?,
    };
    info!("Recommendation table loaded ({} entries)", table.len());

    let mode = if config.word_boundary_matching {
        MatchMode::WordBoundary
    } else {
        MatchMode::Substring
    };
    let analyzer = Arc::new(Analyzer::new(vocabulary, table, mode));
    info!("Analyzer initialized (match mode: {mode:?})");

    let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let sessions = SessionStore::new(config.session_ttl_hours);

    // Build app state
    let state = AppState {
        users,
        sessions,
        analyzer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
