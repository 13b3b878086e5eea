//! Codec errors
//!
//! Only parsing can fail. Exclusion never produces an error.

use thiserror::Error;

use crate::document::DocumentError;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors raised while converting between documents and JSON
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input text is not valid JSON, or output could not be encoded
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level JSON value is not an object
    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// Document construction failed
    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl CodecError {
    /// Stable error code for responses
    pub fn code(&self) -> &'static str {
        match self {
            CodecError::Json(_) => "AERO_CODEC_INVALID_JSON",
            CodecError::NotAnObject(_) => "AERO_CODEC_NOT_AN_OBJECT",
            CodecError::Document(_) => "AERO_CODEC_DOCUMENT",
        }
    }
}
