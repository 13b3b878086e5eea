//! JSON -> Document
//!
//! Assigns every input-visible declared field present in the mapping.
//! Input-excluded fields stay unset whatever the mapping holds, undeclared
//! keys are ignored, and `null` leaves a field unset.

use serde_json::Value;
use std::sync::Arc;

use super::errors::{CodecError, CodecResult};
use crate::document::{json_type_name, Document};
use crate::exclusion::ExclusionResolver;
use crate::observability::Event;
use crate::schema::DocumentType;

/// Builds a document from a JSON object value.
///
/// # Errors
///
/// Returns `CodecError::NotAnObject` if `value` is not an object.
pub fn from_json_value(doc_type: Arc<DocumentType>, value: &Value) -> CodecResult<Document> {
    let obj = value
        .as_object()
        .ok_or_else(|| CodecError::NotAnObject(json_type_name(value)))?;

    let filtered = ExclusionResolver::input().filter_object(&doc_type.fields, obj);

    tracing::debug!(
        event = %Event::DocumentDeserialized,
        schema_id = %doc_type.schema_id,
        schema_version = %doc_type.schema_version,
        supplied = obj.len(),
        assigned = filtered.len(),
        "document deserialized"
    );

    let mut document = Document::new(doc_type);
    for (name, value) in filtered {
        document.assign(&name, value);
    }
    Ok(document)
}

/// Builds a document from JSON text.
pub fn from_json(doc_type: Arc<DocumentType>, json: &str) -> CodecResult<Document> {
    let value: Value = serde_json::from_str(json)?;
    from_json_value(doc_type, &value)
}

impl Document {
    /// Builds a document from JSON text, see [`from_json`].
    pub fn from_json(doc_type: Arc<DocumentType>, json: &str) -> CodecResult<Self> {
        from_json(doc_type, json)
    }
}
