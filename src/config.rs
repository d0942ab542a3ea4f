use std::path::PathBuf;
use std::time::Duration;

/// Public Doppio backend used when `DOPPIO_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://doppio-coffee-mcp.tomas-chudjak.workers.dev";

/// Default timeout for outbound backend requests (30 seconds).
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

const PREFERENCES_DIR: &str = ".doppio-coffee";
const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DOPPIO_API_KEY environment variable is not set")]
    MissingApiKey,
    #[error("DOPPIO_API_URL must not be empty")]
    EmptyApiUrl,
    #[error("DOPPIO_HTTP_TIMEOUT_SECS must be a positive integer")]
    InvalidTimeout,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub api_url: String,
    pub api_key: String,
    pub preferences_path: PathBuf,
    pub http_timeout: Duration,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `DOPPIO_API_KEY` (required): static key sent as `X-API-Key`
    /// - `DOPPIO_API_URL` (optional): backend base URL
    /// - `DOPPIO_PREFERENCES_PATH` (optional, default `~/.doppio-coffee/preferences.json`)
    /// - `DOPPIO_HTTP_TIMEOUT_SECS` (optional, default 30): per-request timeout
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("DOPPIO_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let api_url = match lookup("DOPPIO_API_URL") {
            Some(url) if url.trim().is_empty() => return Err(ConfigError::EmptyApiUrl),
            Some(url) => url,
            None => DEFAULT_API_URL.to_string(),
        };

        let preferences_path = lookup("DOPPIO_PREFERENCES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_preferences_path);

        let http_timeout_secs = match lookup("DOPPIO_HTTP_TIMEOUT_SECS") {
            Some(val) => match val.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout),
            },
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            api_key,
            preferences_path,
            http_timeout: Duration::from_secs(http_timeout_secs),
        })
    }
}

/// `~/.doppio-coffee/preferences.json`, falling back to the working
/// directory (then the temp dir) when no home directory is known.
pub fn default_preferences_path() -> PathBuf {
    dirs::home_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(std::env::temp_dir)
        .join(PREFERENCES_DIR)
        .join(PREFERENCES_FILE)
}
