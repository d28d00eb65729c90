//! Configuration for the reasoning engine client.

use crate::error::{Error, Result};

/// Default hosted model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default per-call timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the hosted reasoning engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// API key
    pub api_key: String,
    /// Base URL override
    pub base_url: Option<String>,
    /// Model identifier
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Sampling temperature; interviews run deterministic at 0.0
    pub temperature: f64,
}

impl EngineConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            temperature: 0.0,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Load configuration from the environment.
    ///
    /// `GEMINI_API_KEY` is required; `INTERVIEWER_MODEL` and
    /// `INTERVIEWER_TIMEOUT_SECS` override the defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| Error::config("GEMINI_API_KEY is not set"))?;

        let mut config = Self::new(api_key);

        if let Ok(model) = std::env::var("INTERVIEWER_MODEL") {
            config = config.with_model(model);
        }
        if let Ok(timeout) = std::env::var("INTERVIEWER_TIMEOUT_SECS") {
            let secs = timeout.parse::<u64>().map_err(|_| {
                Error::config(format!("invalid INTERVIEWER_TIMEOUT_SECS: {timeout}"))
            })?;
            config = config.with_timeout_secs(secs);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::new("key");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.temperature, 0.0);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = EngineConfig::new("key")
            .with_model("gemini-1.5-pro")
            .with_base_url("http://localhost:9999")
            .with_timeout_secs(5)
            .with_temperature(0.7);

        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:9999"));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.temperature, 0.7);
    }
}
