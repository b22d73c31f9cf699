//! Environment-driven settings
//!
//! Every knob is optional and has a default, so a bare `sentiment-service`
//! invocation starts with sensible values. Variables use the `SENTIMENT_`
//! prefix, e.g. `SENTIMENT_API_PORT=9000`.

use config::{Config, Environment};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load settings from environment: {0}")]
    Load(#[from] config::ConfigError),
}

/// Application settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Service display name, reported by `GET /`.
    pub api_title: String,
    /// API version string, reported by `GET /health`.
    pub api_version: String,
    /// Bind address.
    pub api_host: String,
    /// Bind port.
    pub api_port: u16,
    /// Google Translate API key. The unauthenticated endpoint is used
    /// when unset.
    pub google_translate_api_key: Option<String>,
    /// Hugging Face repo id of the sentiment checkpoint.
    pub sentiment_model: String,
    /// Upper bound on a single translation-provider call, in seconds.
    pub translation_timeout_secs: u64,
    /// Fallback log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_title: "Cross-Lingual Sentiment Analysis Service".to_string(),
            api_version: "1.0.0".to_string(),
            api_host: "0.0.0.0".to_string(),
            api_port: 8000,
            google_translate_api_key: None,
            sentiment_model: "clapAI/modernBERT-base-multilingual-sentiment".to_string(),
            translation_timeout_secs: 10,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `SENTIMENT_`-prefixed environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(Environment::with_prefix("SENTIMENT").try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}
