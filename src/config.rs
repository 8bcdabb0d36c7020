//! Gate configuration
//!
//! Oracle endpoint, model, and timeout. Defaults suit a local Ollama
//! install; environment variables override for non-standard setups.

use std::env;
use std::time::Duration;

/// Default Ollama base URL
const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Default classification model (good balance of capability and size)
const DEFAULT_OLLAMA_MODEL: &str = "qwen2.5-coder:7b";

/// Default request timeout in seconds (higher for initial model load)
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for one gate run
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Base URL of the Ollama server
    pub ollama_url: String,
    /// Model used for safety classification
    pub model: String,
    /// Timeout for each oracle request
    pub timeout: Duration,
}

impl GateConfig {
    /// Create a configuration from environment variables
    ///
    /// Reads from:
    /// - `TOOLGATE_OLLAMA_URL` (optional)
    /// - `TOOLGATE_OLLAMA_MODEL` (optional)
    /// - `TOOLGATE_TIMEOUT_SECS` (optional)
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let ollama_url =
            env::var("TOOLGATE_OLLAMA_URL").unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string());

        let model =
            env::var("TOOLGATE_OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_OLLAMA_MODEL.to_string());

        let timeout_secs = env::var("TOOLGATE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            ollama_url,
            model,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Override the Ollama base URL
    pub fn with_ollama_url(mut self, url: impl Into<String>) -> Self {
        self.ollama_url = url.into();
        self
    }

    /// Override the classification model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the oracle request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GateConfig::default();
        assert_eq!(config.ollama_url, "http://localhost:11434");
        assert_eq!(config.model, "qwen2.5-coder:7b");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_overrides() {
        let config = GateConfig::default()
            .with_ollama_url("http://10.0.0.5:11434")
            .with_model("llama3.1:8b")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.ollama_url, "http://10.0.0.5:11434");
        assert_eq!(config.model, "llama3.1:8b");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
