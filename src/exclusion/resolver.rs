//! Exclusion resolver
//!
//! Decides, for one direction, which declared fields take part in a
//! conversion and filters JSON values accordingly:
//!
//! - Excluded fields are dropped, whatever their kind
//! - Scalar values pass through unchanged
//! - Embedded documents are filtered by their own declarations
//! - Lists are filtered element-wise, keeping order and length
//!
//! A `null` field value means unset at every nesting level, so it is
//! dropped like an absent key.
//!
//! The resolver never fails. Values whose shape does not match the declared
//! type (a string where a document is declared) are passed through
//! untouched; shape checks belong to the validation layer.

use serde_json::{Map, Value};

use super::flags::Direction;
use crate::observability::Event;
use crate::schema::{make_path, DocumentType, FieldDef, FieldKind, FieldType};

/// Resolves field visibility for a single direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionResolver {
    direction: Direction,
}

impl ExclusionResolver {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// Resolver for document -> JSON
    pub fn output() -> Self {
        Self::new(Direction::Output)
    }

    /// Resolver for JSON -> document
    pub fn input() -> Self {
        Self::new(Direction::Input)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Effective exclusion of a field for this direction
    pub fn is_excluded(&self, field: &FieldDef) -> bool {
        field.is_excluded(self.direction)
    }

    /// Declared fields that take part in this direction, in declaration order
    pub fn visible_fields<'f>(
        &self,
        fields: &'f [FieldDef],
    ) -> impl Iterator<Item = &'f FieldDef> + 'f {
        let direction = self.direction;
        fields.iter().filter(move |f| !f.is_excluded(direction))
    }

    /// Filters a JSON object against a field list.
    ///
    /// The result holds only visible, declared fields present in `obj` with
    /// a non-null value, in declaration order. Undeclared keys are dropped.
    pub fn filter_object(
        &self,
        fields: &[FieldDef],
        obj: &Map<String, Value>,
    ) -> Map<String, Value> {
        self.filter_object_at(fields, obj, "")
    }

    /// Filters a single value against its declared type.
    pub fn filter_value(&self, field_type: &FieldType, value: &Value) -> Value {
        self.filter_value_at(field_type, value, "")
    }

    fn filter_object_at(
        &self,
        fields: &[FieldDef],
        obj: &Map<String, Value>,
        prefix: &str,
    ) -> Map<String, Value> {
        let mut filtered = Map::new();

        for field in fields {
            if self.is_excluded(field) {
                tracing::trace!(
                    event = %Event::FieldSkipped,
                    direction = %self.direction,
                    field = %make_path(prefix, &field.name),
                    "field excluded"
                );
                continue;
            }

            let value = match obj.get(&field.name) {
                Some(Value::Null) | None => continue,
                Some(value) => value,
            };

            let value = match field.kind() {
                FieldKind::Scalar => value.clone(),
                FieldKind::EmbeddedDocument | FieldKind::ListOfEmbeddedDocument => {
                    let path = make_path(prefix, &field.name);
                    self.filter_value_at(&field.field_type, value, &path)
                }
            };
            filtered.insert(field.name.clone(), value);
        }

        filtered
    }

    fn filter_value_at(&self, field_type: &FieldType, value: &Value, path: &str) -> Value {
        match (field_type, value) {
            (FieldType::Embedded { fields }, Value::Object(obj)) => {
                Value::Object(self.filter_object_at(fields, obj, path))
            }
            (FieldType::List { element_type }, Value::Array(items))
                if element_type.kind() != FieldKind::Scalar =>
            {
                let element_path = format!("{}[]", path);
                Value::Array(
                    items
                        .iter()
                        .map(|item| self.filter_value_at(element_type, item, &element_path))
                        .collect(),
                )
            }
            _ => value.clone(),
        }
    }

    /// Dotted paths of every field reachable in this direction.
    ///
    /// List elements are marked with `[]`, e.g. `items[].name`. Fields under
    /// an excluded container are never listed.
    pub fn visible_paths(&self, doc_type: &DocumentType) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_paths(&doc_type.fields, "", &mut paths);
        paths
    }

    fn collect_paths(&self, fields: &[FieldDef], prefix: &str, paths: &mut Vec<String>) {
        for field in self.visible_fields(fields) {
            let path = make_path(prefix, &field.name);
            paths.push(path.clone());
            self.collect_type_paths(&field.field_type, &path, paths);
        }
    }

    fn collect_type_paths(&self, field_type: &FieldType, path: &str, paths: &mut Vec<String>) {
        match field_type {
            FieldType::Embedded { fields } => self.collect_paths(fields, path, paths),
            FieldType::List { element_type } => {
                self.collect_type_paths(element_type, &format!("{}[]", path), paths)
            }
            _ => {}
        }
    }
}
