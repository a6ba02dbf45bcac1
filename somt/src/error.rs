//! Error handling module for the somt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the somt CLI application.
#[derive(Error, Debug)]
pub enum SomtError {
    /// Error when the configuration cannot be found, read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when reading an input file fails.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when `check` finds problems in the inputs.
    #[error("check failed: {errors} error(s), {warnings} warning(s)")]
    CheckFailed {
        /// Number of error diagnostics.
        errors: usize,
        /// Number of warning diagnostics.
        warnings: usize,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using SomtError.
pub type Result<T> = std::result::Result<T, SomtError>;
