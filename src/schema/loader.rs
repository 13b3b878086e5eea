//! Schema loader for loading document types from disk at startup
//!
//! - Schemas stored at <schema_dir>/schema_<id>_<version>.json
//! - One file per schema version
//! - Malformed schema files cause startup failure (FATAL)
//! - Registered schemas are immutable

use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::errors::{SchemaError, SchemaResult};
use super::types::{make_path, DocumentType};
use crate::exclusion::KNOWN_ANNOTATIONS;
use crate::observability::Event;

/// Schema loader that reads schema files from disk and maintains an in-memory registry.
pub struct SchemaLoader {
    /// Directory containing schema files
    schema_dir: PathBuf,
    /// Loaded document types indexed by (schema_id, schema_version)
    schemas: HashMap<(String, String), Arc<DocumentType>>,
}

impl SchemaLoader {
    /// Creates a new schema loader reading from `schema_dir`.
    pub fn new(schema_dir: &Path) -> Self {
        Self {
            schema_dir: schema_dir.to_path_buf(),
            schemas: HashMap::new(),
        }
    }

    /// Returns the schema directory path.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Loads all schema files from the schema directory.
    ///
    /// Files are loaded in name order so duplicate definitions fail
    /// deterministically.
    pub fn load_all(&mut self) -> SchemaResult<()> {
        if !self.schema_dir.exists() {
            fs::create_dir_all(&self.schema_dir).map_err(|e| {
                SchemaError::malformed_schema(
                    self.schema_dir.display().to_string(),
                    format!("Failed to create schema directory: {}", e),
                )
            })?;
            return Ok(());
        }

        let entries = fs::read_dir(&self.schema_dir).map_err(|e| {
            SchemaError::malformed_schema(
                self.schema_dir.display().to_string(),
                format!("Failed to read schema directory: {}", e),
            )
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                SchemaError::malformed_schema(
                    self.schema_dir.display().to_string(),
                    format!("Failed to read directory entry: {}", e),
                )
            })?;

            let path = entry.path();
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            paths.push(path);
        }
        paths.sort();

        for path in &paths {
            self.load_schema_file(path)?;
        }

        tracing::info!(
            event = %Event::SchemasLoaded,
            count = self.schemas.len(),
            dir = %self.schema_dir.display(),
            "schemas loaded"
        );
        Ok(())
    }

    /// Loads a single schema file.
    fn load_schema_file(&mut self, path: &Path) -> SchemaResult<()> {
        let malformed =
            |reason: String| SchemaError::malformed_schema(path.display().to_string(), reason);

        let content = fs::read_to_string(path)
            .map_err(|e| malformed(format!("Failed to read file: {}", e)))?;

        let raw: Value =
            serde_json::from_str(&content).map_err(|e| malformed(format!("Invalid JSON: {}", e)))?;

        for (field_path, key) in unknown_annotations(&raw) {
            tracing::warn!(
                event = %Event::UnknownAnnotation,
                file = %path.display(),
                field = %field_path,
                annotation = %key,
                "ignoring unrecognized exclusion annotation"
            );
        }

        let doc_type: DocumentType =
            serde_json::from_value(raw).map_err(|e| malformed(format!("Invalid schema: {}", e)))?;

        doc_type.validate_structure().map_err(malformed)?;

        self.insert(doc_type)?;
        Ok(())
    }

    /// Registers a document type directly (for tests or programmatic definition).
    pub fn register(&mut self, doc_type: DocumentType) -> SchemaResult<Arc<DocumentType>> {
        doc_type.validate_structure().map_err(|e| {
            SchemaError::invalid_structure(&doc_type.schema_id, &doc_type.schema_version, e)
        })?;
        self.insert(doc_type)
    }

    fn insert(&mut self, doc_type: DocumentType) -> SchemaResult<Arc<DocumentType>> {
        let key = (doc_type.schema_id.clone(), doc_type.schema_version.clone());

        if self.schemas.contains_key(&key) {
            return Err(SchemaError::schema_immutable(&key.0, &key.1));
        }

        tracing::debug!(
            event = %Event::SchemaRegistered,
            schema_id = %key.0,
            schema_version = %key.1,
            fields = doc_type.fields.len(),
            "schema registered"
        );
        let doc_type = Arc::new(doc_type);
        self.schemas.insert(key, Arc::clone(&doc_type));
        Ok(doc_type)
    }

    /// Gets a document type by ID and version.
    pub fn get(&self, schema_id: &str, schema_version: &str) -> Option<Arc<DocumentType>> {
        self.schemas
            .get(&(schema_id.to_string(), schema_version.to_string()))
            .cloned()
    }

    /// Gets a document type, distinguishing an unknown ID from an unknown version.
    pub fn resolve(
        &self,
        schema_id: &str,
        schema_version: &str,
    ) -> SchemaResult<Arc<DocumentType>> {
        if !self.schema_id_exists(schema_id) {
            return Err(SchemaError::unknown_schema(schema_id));
        }
        self.get(schema_id, schema_version)
            .ok_or_else(|| SchemaError::unknown_version(schema_id, schema_version))
    }

    /// Checks if a schema exists.
    pub fn exists(&self, schema_id: &str, schema_version: &str) -> bool {
        self.get(schema_id, schema_version).is_some()
    }

    /// Checks if any version of a schema ID exists.
    pub fn schema_id_exists(&self, schema_id: &str) -> bool {
        self.schemas.keys().any(|(id, _)| id == schema_id)
    }

    /// Returns the number of loaded schemas.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    /// Saves a document type to disk.
    ///
    /// The document type is validated first, so the file always lands
    /// directly inside the schema directory. Refuses to overwrite an
    /// existing file.
    pub fn save_schema(&self, doc_type: &DocumentType) -> SchemaResult<PathBuf> {
        let (schema_id, schema_version) = doc_type.key();
        doc_type
            .validate_structure()
            .map_err(|e| SchemaError::invalid_structure(schema_id, schema_version, e))?;

        let filename = format!("schema_{}_{}.json", schema_id, schema_version);
        let path = self.schema_dir.join(&filename);

        if path.exists() {
            return Err(SchemaError::schema_immutable(schema_id, schema_version));
        }

        if !self.schema_dir.exists() {
            fs::create_dir_all(&self.schema_dir).map_err(|e| {
                SchemaError::malformed_schema(
                    self.schema_dir.display().to_string(),
                    format!("Failed to create schema directory: {}", e),
                )
            })?;
        }

        let failed =
            |reason: String| SchemaError::malformed_schema(path.display().to_string(), reason);

        let content = serde_json::to_string_pretty(doc_type)
            .map_err(|e| failed(format!("Failed to serialize schema: {}", e)))?;

        fs::write(&path, content).map_err(|e| failed(format!("Failed to write file: {}", e)))?;

        tracing::info!(event = %Event::SchemaSaved, path = %path.display(), "schema saved");
        Ok(path)
    }
}

/// Finds `exclude_*` keys on field declarations that are not recognized
/// exclusion annotations. Returns `(field_path, key)` pairs.
pub fn unknown_annotations(raw: &Value) -> Vec<(String, String)> {
    let mut found = Vec::new();
    if let Some(fields) = raw.get("fields") {
        collect_unknown(fields, "", &mut found);
    }
    found
}

fn collect_unknown(fields: &Value, prefix: &str, found: &mut Vec<(String, String)>) {
    let Some(fields) = fields.as_array() else {
        return;
    };
    for field in fields {
        let Some(obj) = field.as_object() else {
            continue;
        };
        let name = obj.get("name").and_then(Value::as_str).unwrap_or("?");
        let path = make_path(prefix, name);

        for key in obj.keys() {
            if key.starts_with("exclude_") && !KNOWN_ANNOTATIONS.contains(&key.as_str()) {
                found.push((path.clone(), key.clone()));
            }
        }

        collect_nested(field, &path, found);
    }
}

fn collect_nested(type_decl: &Value, path: &str, found: &mut Vec<(String, String)>) {
    if let Some(nested) = type_decl.get("fields") {
        collect_unknown(nested, path, found);
    }
    if let Some(element) = type_decl.get("element_type") {
        collect_nested(element, path, found);
    }
}
