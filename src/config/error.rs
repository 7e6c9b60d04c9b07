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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Cheap price threshold must be greater than zero")]
    InvalidCheapPriceThreshold,

    #[error("Default search term must not be empty")]
    EmptyDefaultSearchTerm,

    #[error("Log level directive must not be empty")]
    EmptyLogLevel,
}
