//! AI provider configuration

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use super::error::ValidationError;

/// Gemini provider configuration
#[derive(Clone, Deserialize)]
pub struct AiConfig {
    /// Google Generative Language API key
    pub google_api_key: Option<String>,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Generative Language API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Sampling temperature passed to the model
    pub temperature: Option<f32>,

    /// Upper bound on generated tokens
    pub max_output_tokens: Option<u32>,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.google_api_key.as_ref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("GOOGLE_API_KEY"));
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyModel);
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidUpstreamTimeout);
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ValidationError::InvalidTemperature(temperature));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field(
                "google_api_key",
                &self.google_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish()
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

fn default_model() -> String {
    "gemini-1.5-pro".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout() -> u64 {
    120
}
