//! Gemini Provider - Implementation of AIProvider for Google's Generative Language API.
//!
//! Sends one `generateContent` call per completion. No streaming and no
//! retries; a failed call is reported to the caller as a classified
//! [`AIError`].
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-1.5-flash")
//!     .with_timeout(Duration::from_secs(60));
//!
//! let provider = GeminiProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{header::RETRY_AFTER, Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::config::AiConfig;
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, MessageRole,
    ProviderInfo, TokenUsage,
};

const DEFAULT_MODEL: &str = "gemini-1.5-pro";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_RETRY_AFTER_SECS: u32 = 30;

/// Configuration for the Gemini provider.
pub struct GeminiConfig {
    /// API key sent in the `x-goog-api-key` header.
    api_key: Secret<String>,
    /// Model to use (e.g., "gemini-1.5-pro").
    pub model: String,
    /// Base URL for the API, without a trailing `/models`.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Upper bound on generated tokens.
    pub max_output_tokens: Option<u32>,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
            temperature: None,
            max_output_tokens: None,
        }
    }

    /// Builds a provider configuration from application config.
    ///
    /// Returns `None` when no API key is configured.
    pub fn from_app_config(config: &AiConfig) -> Option<Self> {
        let key = config
            .google_api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())?;

        Some(
            Self::new(key)
                .with_model(config.model.clone())
                .with_base_url(config.base_url.clone())
                .with_timeout(config.timeout())
                .with_temperature(config.temperature)
                .with_max_output_tokens(config.max_output_tokens),
        )
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the default sampling temperature.
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the default output token limit.
    pub fn with_max_output_tokens(mut self, max: Option<u32>) -> Self {
        self.max_output_tokens = max;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish()
    }
}

/// Gemini API provider implementation.
#[derive(Debug)]
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `AIError::Network` if the HTTP client cannot be constructed.
    pub fn new(config: GeminiConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Converts our request to Gemini's format.
    fn to_gemini_request(&self, request: &CompletionRequest) -> GenerateContentRequest {
        let contents = request
            .messages
            .iter()
            .map(|msg| Content {
                role: Some(
                    match msg.role {
                        MessageRole::User => "user",
                        MessageRole::Assistant => "model",
                    }
                    .to_string(),
                ),
                parts: vec![Part {
                    text: msg.content.clone(),
                }],
            })
            .collect();

        let system_instruction = request.system_prompt.as_ref().map(|prompt| Content {
            role: None,
            parts: vec![Part {
                text: prompt.clone(),
            }],
        });

        let temperature = request.temperature.or(self.config.temperature);
        let max_output_tokens = request.max_tokens.or(self.config.max_output_tokens);
        let generation_config = (temperature.is_some() || max_output_tokens.is_some()).then_some(
            GenerationConfig {
                temperature,
                max_output_tokens,
            },
        );

        GenerateContentRequest {
            contents,
            system_instruction,
            generation_config,
        }
    }

    /// Maps a transport-level failure.
    fn transport_error(&self, e: reqwest::Error) -> AIError {
        if e.is_timeout() {
            AIError::timeout(self.config.timeout.as_secs())
        } else if e.is_connect() {
            AIError::network(format!("Connection failed: {}", e))
        } else {
            AIError::network(e.to_string())
        }
    }

    /// Sends a request to the generateContent endpoint.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let gemini_request = self.to_gemini_request(request);

        self.client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, AIError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let error_body = response.text().await.unwrap_or_default();

        Err(status_to_error(
            status.as_u16(),
            retry_after.as_deref(),
            &error_body,
        ))
    }

    /// Parses a successful response body.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let response = self.handle_response_status(response).await?;

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        let gemini_response: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        into_completion(gemini_response, &self.config.model)
    }
}

#[async_trait]
impl AIProvider for GeminiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }

    fn provider_info(&self) -> ProviderInfo {
        let max_context = match self.config.model.as_str() {
            m if m.starts_with("gemini-1.5-pro") => 2_097_152,
            m if m.starts_with("gemini-1.0") => 32_768,
            _ => 1_048_576,
        };

        ProviderInfo::new("gemini", &self.config.model, max_context)
    }
}

/// Classifies a non-success HTTP status.
fn status_to_error(status: u16, retry_after: Option<&str>, error_body: &str) -> AIError {
    let message = error_message(error_body);

    match status {
        // Gemini reports a bad key as 400 with reason API_KEY_INVALID.
        400 if error_body.contains("API_KEY_INVALID") => AIError::AuthenticationFailed,
        400 | 404 => AIError::InvalidRequest(message),
        401 | 403 => AIError::AuthenticationFailed,
        429 => AIError::rate_limited(
            retry_after
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS),
        ),
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, message)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, message)),
    }
}

/// Extracts `error.message` from a Google API error body, falling back to the raw body.
fn error_message(error_body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(error_body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .unwrap_or_else(|| error_body.to_string())
}

fn finish_reason(raw: Option<&str>) -> FinishReason {
    match raw {
        None | Some("STOP") => FinishReason::Stop,
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT" | "SPII") => {
            FinishReason::ContentFilter
        }
        Some(_) => FinishReason::Other,
    }
}

/// Converts the wire response into a completion.
///
/// The text is the concatenation of the first candidate's parts.
fn into_completion(
    response: GenerateContentResponse,
    requested_model: &str,
) -> Result<CompletionResponse, AIError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(AIError::content_filtered(reason));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AIError::parse("No candidates in response"))?;

    let finish = finish_reason(candidate.finish_reason.as_deref());
    let content: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if content.is_empty() {
        return Err(match finish {
            FinishReason::ContentFilter => AIError::content_filtered(
                candidate
                    .finish_reason
                    .unwrap_or_else(|| "SAFETY".to_string()),
            ),
            _ => AIError::parse("Empty text in response"),
        });
    }

    let usage = response
        .usage_metadata
        .map(|u| TokenUsage::new(u.prompt_token_count, u.candidates_token_count))
        .unwrap_or_default();

    Ok(CompletionResponse {
        content,
        usage,
        model: response
            .model_version
            .unwrap_or_else(|| requested_model.to_string()),
        finish_reason: finish,
    })
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}
