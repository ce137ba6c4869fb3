use std::sync::Arc;

use crate::analysis::pipeline::Analyzer;
use crate::auth::session::SessionStore;
use crate::config::Config;
use crate::repository::UserRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// User directory behind a trait so any persistent store can back it.
    pub users: Arc<dyn UserRepository>,
    pub sessions: SessionStore,
    /// Stateless analysis engine. Vocabulary and recommendation table are
    /// fixed for the lifetime of the process.
    pub analyzer: Arc<Analyzer>,
    pub config: Config,
}
