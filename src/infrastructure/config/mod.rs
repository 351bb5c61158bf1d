use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::LLMConfig;

/// Process configuration, read once at startup and passed into the server
/// state explicitly rather than kept as ambient globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-pro".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the environment. `LOG_ANALYZER_*` variables
    /// override the defaults; the bare `GEMINI_API_KEY` name is accepted as
    /// the conventional spelling for the credential.
    ///
    /// A missing or empty API key is a startup fault.
    pub fn from_env() -> Result<Self> {
        let mut config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Env::prefixed("LOG_ANALYZER_"))
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        if config.api_key.as_deref().map_or(true, str::is_empty) {
            config.api_key = std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty());
        }

        if config.api_key.is_none() {
            return Err(AppError::ConfigError(
                "GEMINI_API_KEY not found in environment variables".to_string(),
            ));
        }

        Ok(config)
    }

    pub fn llm_config(&self) -> LLMConfig {
        LLMConfig {
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            api_key: self.api_key.clone(),
            ..LLMConfig::default()
        }
    }
}
