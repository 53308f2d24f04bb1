//! # CLI Errors
//!
//! Error types for configuration loading and server startup.

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI and bootstrap errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, unreadable, or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server failed to bind or serve
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        CliError::Config(message.into())
    }
}
