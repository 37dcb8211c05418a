//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TRIP_PLANNER` prefix and nested values use double underscores as separators.
//! The bare `GOOGLE_API_KEY` variable is honoured as the Gemini credential.
//!
//! # Example
//!
//! ```no_run
//! use trip_planner::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod error;
mod markdown;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use markdown::MarkdownConfig;
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Environment variable holding the Gemini API key.
pub const GOOGLE_API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Root application configuration
///
/// Built once at startup and handed to the adapters; never mutated afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging, timeouts)
    #[serde(default)]
    pub server: ServerConfig,

    /// Gemini provider configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// Markdown rendering options
    #[serde(default)]
    pub markdown: MarkdownConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TRIP_PLANNER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Applies `GOOGLE_API_KEY` on top as `ai.google_api_key`
    ///
    /// # Environment Variable Format
    ///
    /// - `TRIP_PLANNER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TRIP_PLANNER__AI__MODEL=gemini-1.5-flash` -> `ai.model = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    /// A missing API key is reported by [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TRIP_PLANNER")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("ai.google_api_key", std::env::var(GOOGLE_API_KEY_VAR).ok())?
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid,
    /// including a missing `GOOGLE_API_KEY`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        if self.ai.timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::UpstreamTimeoutTooLong {
                upstream_secs: self.ai.timeout_secs,
                request_secs: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
