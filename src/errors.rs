//! Error types for textprep
//!
//! This module defines the error types used throughout the library.
//! All errors are designed to be informative and actionable.
//!
//! Note that [`Pipeline::process`](crate::pipeline::Pipeline::process) never
//! returns an error: stage failures degrade to fallbacks and are reported as
//! warnings. The types here cover configuration validation and the
//! stage-internal failures the runner absorbs.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TextPrepError>;

/// Main error type for textprep
#[derive(Error, Debug, Clone)]
pub enum TextPrepError {
    /// A stage produced no usable output for non-empty input
    #[error("Stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },

    /// A required lexical resource is missing or unusable
    #[error("Resource error: {message}")]
    Resource { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl TextPrepError {
    /// Create a stage failure error
    pub fn stage_failed(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StageFailed {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Create a resource error
    pub fn resource(message: impl Into<String>) -> Self {
        Self::Resource {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for TextPrepError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TextPrepError::stage_failed("tokenize", "no tokens produced");
        assert!(err.to_string().contains("tokenize"));
        assert!(err.to_string().contains("no tokens produced"));

        let err = TextPrepError::invalid_config("language must not be empty");
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = TextPrepError::resource("stopword list unavailable");
        let _: &dyn std::error::Error = &err;
    }
}
