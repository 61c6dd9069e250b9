//! Host configuration parsed from environment variables.
//!
//! A `.env` file is loaded first when present. Unset variables take their
//! defaults; set but malformed numbers are rejected so a typo never silently
//! falls back.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
pub const DEFAULT_ADMIN_PORT: u16 = 3001;
pub const DEFAULT_STUDENT_PORT: u16 = 3000;
pub const DEFAULT_CHAT_REPLY_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub port: u16,
    /// Origin of the ingestion backend the browser talks to.
    pub backend_url: String,
}

impl AdminConfig {
    /// Reads `PORT` and `ADMIN_BACKEND_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend_url = std::env::var("ADMIN_BACKEND_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        Ok(Self { port: env_port(DEFAULT_ADMIN_PORT)?, backend_url })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentConfig {
    pub port: u16,
    /// Directory served under `/data`.
    pub catalog_dir: PathBuf,
    pub chat_reply_delay: Duration,
}

impl StudentConfig {
    /// Reads `PORT`, `CATALOG_DIR`, and `CHAT_REPLY_DELAY_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let catalog_dir = std::env::var("CATALOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data"));
        let delay_ms = env_parse_u64("CHAT_REPLY_DELAY_MS", DEFAULT_CHAT_REPLY_DELAY_MS)?;
        Ok(Self { port: env_port(DEFAULT_STUDENT_PORT)?, catalog_dir, chat_reply_delay: Duration::from_millis(delay_ms) })
    }
}

/// Load `.env` if present. Returns the error for a file that exists but
/// cannot be read, so it can be logged once tracing is up.
pub fn load_dotenv() -> Option<dotenvy::Error> {
    dotenvy::dotenv().err().filter(|e| !e.not_found())
}

fn env_parse_u64(var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(var) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidNumber { var, value: raw })
        }
        _ => Ok(default),
    }
}

fn env_port(default: u16) -> Result<u16, ConfigError> {
    match std::env::var("PORT") {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidNumber { var: "PORT", value: raw })
        }
        _ => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
