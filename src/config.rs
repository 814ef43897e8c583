use std::env;

use dotenvy::dotenv;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidVar { key: &'static str, value: String },
}

/// Runtime settings, resolved once at startup and handed to the
/// components that need them. There is no global config instance.
#[derive(Debug, Clone)]
pub struct Config {
    pub mistral_api_key: String,
    pub mistral_api_url: String,
    pub mistral_model: String,
    pub search_api_url: String,
    pub bind_addr: String,
    pub static_dir: String,
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Config, ConfigError> {
        dotenv().ok(); // Load .env file if present
        Config::from_source(|key| env::var(key).ok())
    }

    fn from_source(get: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
        let http_timeout_secs: u64 = match get("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                key: "HTTP_TIMEOUT_SECS",
                value: raw.clone(),
            })?,
            None => 30,
        };

        Ok(Config {
            // Required. There is no built-in fallback key.
            mistral_api_key: get("MISTRAL_API_KEY")
                .filter(|key| !key.trim().is_empty())
                .ok_or(ConfigError::MissingVar("MISTRAL_API_KEY"))?,
            mistral_api_url: get("MISTRAL_API_URL")
                .unwrap_or_else(|| "https://api.mistral.ai/v1/chat/completions".to_string()),
            mistral_model: get("MISTRAL_MODEL").unwrap_or_else(|| "mistral-small".to_string()),
            search_api_url: get("SEARCH_API_URL")
                .unwrap_or_else(|| "https://api.duckduckgo.com/".to_string()),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8000".to_string()),
            static_dir: get("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
            http_timeout_secs,
        })
    }
}
