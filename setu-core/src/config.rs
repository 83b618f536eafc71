//! Environment configuration

use std::path::PathBuf;

/// Runtime configuration for the demo shell
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Log level filter ("trace" … "error")
    pub log_level: String,
    /// Directory holding the persisted session entry
    pub session_dir: PathBuf,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            session_dir: PathBuf::from(".nagarsetu"),
        }
    }
}

impl CoreConfig {
    /// Load configuration from the environment (reads `.env` first)
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let defaults = Self::default();

        Self {
            log_level: std::env::var("SETU_LOG_LEVEL").unwrap_or(defaults.log_level),
            session_dir: std::env::var("SETU_SESSION_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_dir),
        }
    }
}
