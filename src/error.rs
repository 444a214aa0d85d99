//! Error types for envsplit
//!
//! Every stage returns `Result<T, Error>` with the error defined here.
//! Nothing is recovered locally; errors bubble up to the CLI runner.

use thiserror::Error;

/// The main error type for envsplit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Input file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Unexpected input shape: {message}")]
    Schema { message: String },

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write '{path}': {message}")]
    Output { path: String, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a schema error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Create an output error for a given path
    pub fn output(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Output {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for envsplit
pub type Result<T> = std::result::Result<T, Error>;
