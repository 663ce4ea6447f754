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
    #[error("Consistency threshold must be in (0, 1]")]
    InvalidConsistencyThreshold,

    #[error("Top-N must be at least 1")]
    InvalidTopN,

    #[error("Input path cannot be empty")]
    EmptyInputPath,

    #[error("Output path cannot be empty")]
    EmptyOutputPath,

    #[error("Report path cannot be empty")]
    EmptyReportPath,
}
