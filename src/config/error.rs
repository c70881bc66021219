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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address")]
    InvalidBindAddress,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error(
        "Request timeout ({request_secs}s) must exceed the generator timeout ({generator_secs}s)"
    )]
    RequestTimeoutTooShort {
        request_secs: u64,
        generator_secs: u64,
    },

    #[error("Generator URL must use http or https")]
    InvalidGeneratorUrl,
}
