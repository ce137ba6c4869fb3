use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every knob has a default, so the service starts with no env at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on the uploaded resume size, in bytes.
    pub max_upload_bytes: usize,
    pub session_ttl_hours: i64,
    /// Stricter skill detection that refuses matches inside larger words.
    pub word_boundary_matching: bool,
    /// Optional path to a JSON array replacing the built-in skill vocabulary.
    pub vocabulary_path: Option<String>,
    /// Optional path to a JSON object replacing the built-in recommendation table.
    pub recommendations_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", &DEFAULT_MAX_UPLOAD_BYTES.to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a number of bytes")?,
            session_ttl_hours: env_or("SESSION_TTL_HOURS", "24")
                .parse::<i64>()
                .context("SESSION_TTL_HOURS must be a number of hours")?,
            word_boundary_matching: matches!(
                env_or("WORD_BOUNDARY_MATCHING", "false").to_lowercase().as_str(),
                "1" | "true" | "yes"
            ),
            vocabulary_path: std::env::var("SKILL_VOCABULARY_PATH").ok(),
            recommendations_path: std::env::var("RECOMMENDATIONS_PATH").ok(),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
