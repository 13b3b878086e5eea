//! Document instances
//!
//! A [`Document`] holds values for the fields of one document type. A field
//! with no stored value is in its default (unset) state. Storing `null`
//! unsets the field.
//!
//! Construction assigns values as given: exclusion flags only apply when
//! converting to or from JSON, never here.

mod errors;

pub use errors::{DocumentError, DocumentResult};

use serde_json::{Map, Value};
use std::sync::Arc;

use crate::schema::DocumentType;

/// An instance of a document type
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    doc_type: Arc<DocumentType>,
    values: Map<String, Value>,
}

impl Document {
    /// Creates a document with every field unset
    pub fn new(doc_type: Arc<DocumentType>) -> Self {
        Self {
            doc_type,
            values: Map::new(),
        }
    }

    /// Creates a document and assigns every entry of `values`.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError` if `values` is not an object or names a field
    /// the document type does not declare.
    pub fn with_values(doc_type: Arc<DocumentType>, values: Value) -> DocumentResult<Self> {
        let values = match values {
            Value::Object(values) => values,
            other => return Err(DocumentError::NotAnObject(json_type_name(&other))),
        };

        let mut document = Self::new(doc_type);
        for (name, value) in values {
            document.set(&name, value)?;
        }
        Ok(document)
    }

    /// Returns the document type
    pub fn doc_type(&self) -> &Arc<DocumentType> {
        &self.doc_type
    }

    /// Returns the stored value, or `None` if the field is unset
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns true if the field holds a value
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Assigns a field value. `null` unsets the field.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> DocumentResult<()> {
        if self.doc_type.field(name).is_none() {
            return Err(DocumentError::unknown_field(&self.doc_type.schema_id, name));
        }

        let value = value.into();
        if value.is_null() {
            self.values.remove(name);
        } else {
            self.values.insert(name.to_string(), value);
        }
        Ok(())
    }

    /// Resets a field to its default state, returning the previous value
    pub fn unset(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    /// Stored values, unfiltered, in declaration order.
    ///
    /// This is the document's own state, not its JSON representation; use
    /// the codec to serialize.
    pub fn stored_values(&self) -> Map<String, Value> {
        self.doc_type
            .fields
            .iter()
            .filter_map(|f| self.values.get(&f.name).map(|v| (f.name.clone(), v.clone())))
            .collect()
    }

    pub(crate) fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Stores a value that has already been checked against the declarations.
    pub(crate) fn assign(&mut self, name: &str, value: Value) {
        if !value.is_null() {
            self.values.insert(name.to_string(), value);
        }
    }
}

/// Returns the JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDef;
    use serde_json::json;

    fn doc_type() -> Arc<DocumentType> {
        Arc::new(DocumentType::new(
            "exclusion",
            "v1",
            vec![
                FieldDef::string("to_json_exclude").exclude_to_json(),
                FieldDef::int("from_json_exclude").exclude_from_json(),
                FieldDef::string("required").required(),
            ],
        ))
    }

    #[test]
    fn test_construction_ignores_exclusion_flags() {
        let doc = Document::with_values(
            doc_type(),
            json!({ "to_json_exclude": "Hello", "from_json_exclude": 10234, "required": "World" }),
        )
        .unwrap();

        assert_eq!(doc.get("to_json_exclude"), Some(&json!("Hello")));
        assert_eq!(doc.get("from_json_exclude"), Some(&json!(10234)));
        assert_eq!(doc.get("required"), Some(&json!("World")));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Document::with_values(doc_type(), json!({ "nope": 1 })).unwrap_err();
        assert_eq!(err, DocumentError::unknown_field("exclusion", "nope"));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_values_must_be_object() {
        let err = Document::with_values(doc_type(), json!([1, 2])).unwrap_err();
        assert_eq!(err, DocumentError::NotAnObject("array"));
    }

    #[test]
    fn test_null_unsets() {
        let mut doc = Document::new(doc_type());
        doc.set("required", "x").unwrap();
        assert!(doc.is_set("required"));

        doc.set("required", Value::Null).unwrap();
        assert!(!doc.is_set("required"));
        assert!(doc.get("required").is_none());
    }

    #[test]
    fn test_unset_returns_previous() {
        let mut doc = Document::new(doc_type());
        doc.set("from_json_exclude", 5).unwrap();
        assert_eq!(doc.unset("from_json_exclude"), Some(json!(5)));
        assert_eq!(doc.unset("from_json_exclude"), None);
    }

    #[test]
    fn test_stored_values_in_declaration_order() {
        let mut doc = Document::new(doc_type());
        doc.set("required", "World").unwrap();
        doc.set("to_json_exclude", "Hello").unwrap();

        let keys: Vec<String> = doc.stored_values().keys().cloned().collect();
        assert_eq!(keys, vec!["to_json_exclude", "required"]);
    }
}
