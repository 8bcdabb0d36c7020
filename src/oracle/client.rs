//! Ollama oracle client
//!
//! Single-shot requests against a local Ollama server's `/api/generate`
//! endpoint. The model's reply is free text that should contain one JSON
//! object; the client extracts and decodes that span.
//!
//! Every failure mode (transport, timeout, bad status, missing or
//! unparsable JSON) collapses to `None`. The gate treats `None` as
//! "no verdict", never as "safe". One attempt per question, no retries.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::GateConfig;
use crate::core::SafetyVerdict;

use super::prompts::{CLASSIFY_SYSTEM_PROMPT, PATTERN_SYSTEM_PROMPT};

/// Sampling temperature for classification (low for consistent answers)
const ORACLE_TEMPERATURE: f32 = 0.1;

/// Upper bound on generated tokens (the reply is a short JSON object)
const ORACLE_NUM_PREDICT: u32 = 100;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[derive(Debug, Deserialize)]
struct PatternReply {
    #[serde(default)]
    pattern: String,
}

/// Client for the local safety oracle
pub struct OracleClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OracleClient {
    /// Create a client from the gate configuration
    pub fn new(config: &GateConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.ollama_url.clone(),
            model: config.model.clone(),
        })
    }

    /// The generate endpoint URL
    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    /// Ask the oracle whether the described action is safe
    ///
    /// `analysis` is the formatted description of the tool call. Returns
    /// `None` when the oracle is unavailable or its reply is unusable.
    pub async fn classify(&self, analysis: &str) -> Option<SafetyVerdict> {
        let text = match self.generate(analysis, CLASSIFY_SYSTEM_PROMPT).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("[Oracle] Safety query failed: {:#}", e);
                return None;
            }
        };

        let json = match Self::extract_json(&text) {
            Some(json) => json,
            None => {
                tracing::warn!("[Oracle] No JSON object in safety reply");
                return None;
            }
        };

        match serde_json::from_str::<SafetyVerdict>(json) {
            Ok(verdict) => {
                tracing::debug!(
                    "[Oracle] Verdict: safe={} reason={}",
                    verdict.safe,
                    verdict.reason
                );
                Some(verdict)
            }
            Err(e) => {
                tracing::warn!("[Oracle] Unparsable safety verdict: {}", e);
                None
            }
        }
    }

    /// Ask the oracle for the safest whitelist pattern for a command
    ///
    /// Returns `None` when the oracle abstains (replies `"none"`), is
    /// unavailable, or its reply is unusable.
    pub async fn propose_pattern(&self, command: &str) -> Option<String> {
        let prompt = format!("Command: {}", command);

        let text = match self.generate(&prompt, PATTERN_SYSTEM_PROMPT).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("[Oracle] Pattern query failed: {:#}", e);
                return None;
            }
        };

        let json = match Self::extract_json(&text) {
            Some(json) => json,
            None => {
                tracing::warn!("[Oracle] No JSON object in pattern reply");
                return None;
            }
        };

        let reply = match serde_json::from_str::<PatternReply>(json) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("[Oracle] Unparsable pattern reply: {}", e);
                return None;
            }
        };

        if reply.pattern.is_empty() || reply.pattern == "none" {
            return None;
        }

        Some(reply.pattern)
    }

    /// Send one generate request and return the reply text
    async fn generate(&self, prompt: &str, system: &str) -> Result<String> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            system,
            stream: false,
            options: GenerateOptions {
                temperature: ORACLE_TEMPERATURE,
                num_predict: ORACLE_NUM_PREDICT,
            },
        };

        let url = self.generate_url();
        tracing::debug!("[Oracle] POST {} (model: {})", url, self.model);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Ollama")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read Ollama response body")?;

        if !status.is_success() {
            anyhow::bail!("Ollama API error ({}): {}", status, body);
        }

        let reply: GenerateResponse =
            serde_json::from_str(&body).context("Failed to parse Ollama response envelope")?;

        Ok(reply.response)
    }

    /// Extract the span between the first `{` and the last `}` in the text
    fn extract_json(text: &str) -> Option<&str> {
        let start = text.find('{')?;
        let end = text.rfind('}')?;
        if end < start {
            return None;
        }
        Some(&text[start..=end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_url() {
        let config = GateConfig::default();
        let client = OracleClient::new(&config).unwrap();
        assert_eq!(
            client.generate_url(),
            "http://localhost:11434/api/generate"
        );
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateRequest {
            model: "qwen2.5-coder:7b",
            prompt: "Command: ls",
            system: "system text",
            stream: false,
            options: GenerateOptions {
                temperature: ORACLE_TEMPERATURE,
                num_predict: ORACLE_NUM_PREDICT,
            },
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""model":"qwen2.5-coder:7b""#));
        assert!(json.contains(r#""stream":false"#));
        assert!(json.contains(r#""temperature":0.1"#));
        assert!(json.contains(r#""num_predict":100"#));
    }

    #[test]
    fn test_extract_json_embedded() {
        let text = r#"Sure! Here is my answer: {"safe": true, "reason": "read-only"} Hope that helps."#;
        assert_eq!(
            OracleClient::extract_json(text),
            Some(r#"{"safe": true, "reason": "read-only"}"#)
        );
    }

    #[test]
    fn test_extract_json_whole_reply() {
        let text = r#"{"pattern": "none"}"#;
        assert_eq!(OracleClient::extract_json(text), Some(text));
    }

    #[test]
    fn test_extract_json_missing_or_reversed() {
        assert_eq!(OracleClient::extract_json("no json here"), None);
        assert_eq!(OracleClient::extract_json("} backwards {"), None);
        assert_eq!(OracleClient::extract_json("only open {"), None);
    }

    #[test]
    fn test_extract_json_nested_uses_outer_span() {
        let text = r#"{"a": {"b": 1}}"#;
        assert_eq!(OracleClient::extract_json(text), Some(text));
    }

    #[test]
    fn test_verdict_parses_from_extracted_span() {
        let text = r#"The command is fine. {"safe": true, "reason": "lists files"}"#;
        let json = OracleClient::extract_json(text).unwrap();
        let verdict: SafetyVerdict = serde_json::from_str(json).unwrap();
        assert!(verdict.safe);
        assert_eq!(verdict.reason, "lists files");
    }
}
