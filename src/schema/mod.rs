//! Document type definitions for aerojson
//!
//! A document type is an ordered list of field declarations. Each field
//! carries its data type, a persistence-level `required` marker, and
//! directional exclusion flags.
//!
//! # Design Principles
//!
//! - Document types are immutable once registered
//! - Field order is the serialized key order
//! - Structure checks cover names only; flags are never rejected
//! - `required` is metadata for the persistence layer and is not enforced here

mod errors;
mod loader;
mod types;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, Severity};
pub use loader::{unknown_annotations, SchemaLoader};
pub use types::{DocumentType, FieldDef, FieldKind, FieldType};
pub(crate) use types::make_path;
