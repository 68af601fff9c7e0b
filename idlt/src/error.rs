//! Error handling module for the idlt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the idlt CLI application.
#[derive(Error, Debug)]
pub enum IdltError {
    /// Error when the configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when command-line input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when scanned sources contained illegal tokens.
    #[error("Lexical errors: {0}")]
    Lexical(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using IdltError.
pub type Result<T> = std::result::Result<T, IdltError>;
