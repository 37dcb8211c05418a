//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid AI base URL: must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("AI model name cannot be empty")]
    EmptyModel,

    #[error("Invalid AI request timeout (must be 1-300 seconds)")]
    InvalidUpstreamTimeout,

    #[error("AI timeout ({upstream_secs}s) must be shorter than the request timeout ({request_secs}s)")]
    UpstreamTimeoutTooLong { upstream_secs: u64, request_secs: u64 },

    #[error("Invalid temperature {0} (must be between 0.0 and 2.0)")]
    InvalidTemperature(f32),
}
