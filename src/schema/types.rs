//! Document type definitions
//!
//! Supported field types:
//! - string, int, bool, float, object_id, datetime: scalars, passed through as-is
//! - embedded: nested document with its own ordered field list
//! - list: homogeneous list with an element type
//!
//! Field order is significant: it is the order in which serialized keys are
//! emitted.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::exclusion::{Direction, ExclusionFlags};

/// Supported field types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// Boolean
    Bool,
    /// 64-bit floating point
    Float,
    /// Document identifier, encoded by the host layer
    ObjectId,
    /// Timestamp, encoded by the host layer
    #[serde(rename = "datetime")]
    DateTime,
    /// Nested document with its own field declarations
    Embedded {
        /// Nested field definitions, in emission order
        fields: Vec<FieldDef>,
    },
    /// Homogeneous list with single element type
    List {
        /// Element type (boxed to allow recursive types)
        element_type: Box<FieldType>,
    },
}

impl FieldType {
    /// Classifies the type for exclusion purposes.
    ///
    /// A list is a list of embedded documents when its elements need
    /// filtering, so nested lists of embedded documents qualify too.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldType::Embedded { .. } => FieldKind::EmbeddedDocument,
            FieldType::List { element_type } if element_type.kind() != FieldKind::Scalar => {
                FieldKind::ListOfEmbeddedDocument
            }
            _ => FieldKind::Scalar,
        }
    }

    /// Declarations of the innermost embedded document, if any
    pub fn nested_fields(&self) -> Option<&[FieldDef]> {
        match self {
            FieldType::Embedded { fields } => Some(fields),
            FieldType::List { element_type } => element_type.nested_fields(),
            _ => None,
        }
    }

    /// Shorthand for a list of embedded documents
    pub fn list_of_embedded(fields: Vec<FieldDef>) -> Self {
        FieldType::List {
            element_type: Box::new(FieldType::Embedded { fields }),
        }
    }
}

/// Classification of a field for exclusion purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Value passes through unchanged
    Scalar,
    /// Value is a nested document filtered by its own declarations
    EmbeddedDocument,
    /// Every element is a nested document filtered independently
    ListOfEmbeddedDocument,
}

/// Field definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name, unique within its document type
    pub name: String,
    /// Field data type
    #[serde(flatten)]
    pub field_type: FieldType,
    /// Whether the persistence layer requires the field. Never enforced by
    /// the JSON conversion.
    #[serde(default)]
    pub required: bool,
    /// Directional exclusion flags
    #[serde(flatten)]
    pub exclusion: ExclusionFlags,
}

impl FieldDef {
    /// Create an optional, unannotated field
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            exclusion: ExclusionFlags::NONE,
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String)
    }

    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Int)
    }

    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Bool)
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Float)
    }

    pub fn object_id(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::ObjectId)
    }

    pub fn datetime(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::DateTime)
    }

    /// Create an embedded document field
    pub fn embedded(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self::new(name, FieldType::Embedded { fields })
    }

    /// Create a list field with the given element type
    pub fn list(name: impl Into<String>, element_type: FieldType) -> Self {
        Self::new(
            name,
            FieldType::List {
                element_type: Box::new(element_type),
            },
        )
    }

    /// Create a list-of-embedded-documents field
    pub fn list_of_embedded(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self::new(name, FieldType::list_of_embedded(fields))
    }

    /// Mark the field as required by the persistence layer
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach exclusion metadata.
    ///
    /// Flags are unioned with any already present, so repeated annotation is
    /// idempotent.
    pub fn annotate(
        mut self,
        exclude_to_json: bool,
        exclude_from_json: bool,
        exclude_json: bool,
    ) -> Self {
        self.exclusion = self
            .exclusion
            .union(ExclusionFlags::new(exclude_to_json, exclude_from_json, exclude_json));
        self
    }

    pub fn exclude_to_json(self) -> Self {
        self.annotate(true, false, false)
    }

    pub fn exclude_from_json(self) -> Self {
        self.annotate(false, true, false)
    }

    pub fn exclude_json(self) -> Self {
        self.annotate(false, false, true)
    }

    /// Effective exclusion for a direction
    pub fn is_excluded(&self, direction: Direction) -> bool {
        self.exclusion.excludes(direction)
    }

    /// Returns the field classification
    pub fn kind(&self) -> FieldKind {
        self.field_type.kind()
    }

    /// Returns the nested declarations for embedded and list-of-embedded fields
    pub fn nested_fields(&self) -> Option<&[FieldDef]> {
        self.field_type.nested_fields()
    }
}

/// Complete document type definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentType {
    /// Unique schema identifier
    pub schema_id: String,
    /// Schema version
    pub schema_version: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Field definitions, in emission order
    pub fields: Vec<FieldDef>,
}

impl DocumentType {
    /// Create a new document type
    pub fn new(
        schema_id: impl Into<String>,
        schema_version: impl Into<String>,
        fields: Vec<FieldDef>,
    ) -> Self {
        Self {
            schema_id: schema_id.into(),
            schema_version: schema_version.into(),
            description: None,
            fields,
        }
    }

    /// Returns the unique key for this document type (id, version)
    pub fn key(&self) -> (&str, &str) {
        (&self.schema_id, &self.schema_version)
    }

    /// Looks up a top-level field by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validates the document type structure itself (not a document).
    ///
    /// The schema id and version name the schema file, so each must be a
    /// plain file name component. Field names must be non-empty and unique
    /// at every nesting level. Exclusion flags are never rejected.
    pub fn validate_structure(&self) -> Result<(), String> {
        validate_key_part("schema_id", &self.schema_id)?;
        validate_key_part("schema_version", &self.schema_version)?;
        validate_fields(&self.fields, "")
    }
}

fn validate_key_part(label: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{} must not be empty", label));
    }
    if value == "." || value == ".." || value.contains(|c| c == '/' || c == '\\') {
        return Err(format!("{} '{}' is not a valid file name component", label, value));
    }
    Ok(())
}

fn validate_fields(fields: &[FieldDef], path_prefix: &str) -> Result<(), String> {
    let mut seen = HashSet::new();
    for field in fields {
        if field.name.is_empty() {
            return Err(format!("Empty field name in '{}'", display_prefix(path_prefix)));
        }
        let path = make_path(path_prefix, &field.name);
        if !seen.insert(field.name.as_str()) {
            return Err(format!("Duplicate field '{}'", path));
        }
        if let Some(nested) = field.nested_fields() {
            validate_fields(nested, &path)?;
        }
    }
    Ok(())
}

/// Creates a field path from prefix and field name.
pub(crate) fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

fn display_prefix(prefix: &str) -> &str {
    if prefix.is_empty() {
        "$root"
    } else {
        prefix
    }
}
