//! Error types for excel-interviewer.

use thiserror::Error;

/// Result type alias using excel-interviewer's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving an interview session.
#[derive(Error, Debug)]
pub enum Error {
    /// Reasoning engine API error
    #[error("Engine API error: {provider} - {message}")]
    EngineApi { provider: String, message: String },

    /// Engine error (simple variant)
    #[error("Engine error: {0}")]
    Engine(String),

    /// Timeout during an engine call
    #[error("Engine call timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// The engine reply did not match the requested output mode
    #[error("Unexpected engine reply: expected {expected}, got {actual}")]
    UnexpectedReply {
        expected: &'static str,
        actual: &'static str,
    },

    /// The structured payload failed report-schema validation
    #[error("Report validation failed: {0}")]
    ReportValidation(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP server error (bind or serve failure)
    #[error("Server error: {0}")]
    Server(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an engine API error.
    pub fn engine_api(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::EngineApi {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a timeout error.
    pub fn timeout(duration_ms: u64) -> Self {
        Self::Timeout { duration_ms }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report validation error.
    pub fn report_validation(message: impl Into<String>) -> Self {
        Self::ReportValidation(message.into())
    }
}
