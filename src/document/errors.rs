//! Document errors

use thiserror::Error;

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors raised while building or mutating a document instance
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// Field is not declared on the document type
    #[error("Field '{field}' is not declared on schema '{schema_id}'")]
    UnknownField { schema_id: String, field: String },

    /// Document values were not supplied as an object
    #[error("Document values must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

impl DocumentError {
    pub fn unknown_field(schema_id: impl Into<String>, field: impl Into<String>) -> Self {
        DocumentError::UnknownField {
            schema_id: schema_id.into(),
            field: field.into(),
        }
    }
}
