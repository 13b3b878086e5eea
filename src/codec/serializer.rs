//! Document -> JSON
//!
//! Emits every output-visible field that holds a value, in declaration
//! order. Nested documents and lists of documents are filtered by their own
//! declarations. Unset fields are not emitted.

use serde_json::Value;

use super::errors::CodecResult;
use crate::document::Document;
use crate::exclusion::ExclusionResolver;
use crate::observability::Event;

/// Serializes a document into a JSON object value.
pub fn to_json_value(document: &Document) -> Value {
    let doc_type = document.doc_type();
    let filtered = ExclusionResolver::output().filter_object(&doc_type.fields, document.values());

    tracing::debug!(
        event = %Event::DocumentSerialized,
        schema_id = %doc_type.schema_id,
        schema_version = %doc_type.schema_version,
        emitted = filtered.len(),
        "document serialized"
    );
    Value::Object(filtered)
}

/// Serializes a document into compact JSON text.
pub fn to_json(document: &Document) -> CodecResult<String> {
    Ok(serde_json::to_string(&to_json_value(document))?)
}

/// Serializes a document into indented JSON text.
pub fn to_json_pretty(document: &Document) -> CodecResult<String> {
    Ok(serde_json::to_string_pretty(&to_json_value(document))?)
}

impl Document {
    /// Serializes this document, see [`to_json`].
    pub fn to_json(&self) -> CodecResult<String> {
        to_json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DocumentType, FieldDef};
    use serde_json::json;
    use std::sync::Arc;

    fn doc_type() -> Arc<DocumentType> {
        Arc::new(DocumentType::new(
            "exclusion",
            "v1",
            vec![
                FieldDef::string("a").exclude_to_json(),
                FieldDef::int("b").exclude_from_json(),
                FieldDef::string("c").exclude_json(),
                FieldDef::string("d").required(),
            ],
        ))
    }

    #[test]
    fn test_serialize_omits_output_excluded() {
        let values = json!({ "a": "X", "b": 7, "c": "Y", "d": "Z" });
        let doc = Document::with_values(doc_type(), values).unwrap();
        assert_eq!(to_json_value(&doc), json!({ "b": 7, "d": "Z" }));
    }

    #[test]
    fn test_serialize_text_keeps_declaration_order() {
        let mut doc = Document::new(doc_type());
        doc.set("d", "Z").unwrap();
        doc.set("b", 7).unwrap();

        assert_eq!(doc.to_json().unwrap(), r#"{"b":7,"d":"Z"}"#);
    }

    #[test]
    fn test_unset_fields_not_emitted() {
        let doc = Document::new(doc_type());
        assert_eq!(to_json_value(&doc), json!({}));
    }

    #[test]
    fn test_required_but_excluded_is_omitted_without_error() {
        let doc_type = Arc::new(DocumentType::new(
            "secret",
            "v1",
            vec![FieldDef::string("token").required().exclude_json()],
        ));
        let doc = Document::with_values(doc_type, json!({ "token": "t" })).unwrap();
        assert_eq!(to_json(&doc).unwrap(), "{}");
    }

    #[test]
    fn test_pretty_output_parses_back() {
        let doc = Document::with_values(doc_type(), json!({ "b": 1, "d": "x" })).unwrap();
        let text = to_json_pretty(&doc).unwrap();
        assert!(text.contains('\n'));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, json!({ "b": 1, "d": "x" }));
    }
}
