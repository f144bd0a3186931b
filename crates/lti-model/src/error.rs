//! Error types for base-configuration parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing an internal LTI configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// Placement identifier is not a member of the known placement set.
    #[error("unknown placement '{value}'")]
    UnknownPlacement { value: String },

    /// Privacy level is not a member of the known set.
    #[error("unknown privacy level '{value}'")]
    UnknownPrivacyLevel { value: String },

    /// LTI message type is not a member of the known set.
    #[error("unknown LTI message type '{value}'")]
    UnknownMessageType { value: String },

    /// Configuration document is not valid JSON or fails schema checks.
    #[error("failed to parse LTI configuration: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// Public JWK could not be encoded to its canonical text form.
    #[error("failed to encode public JWK: {source}")]
    JwkEncode {
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
