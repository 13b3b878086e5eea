//! aerojson - Directional field exclusion for document/JSON conversion
//!
//! Fields of a document type carry three flags: `exclude_to_json`,
//! `exclude_from_json` and `exclude_json`. Serialization leaves out every
//! field excluded for output; deserialization never assigns a field
//! excluded for input. Embedded documents and lists of embedded documents
//! are filtered recursively by their own declarations.
//!
//! ```
//! use std::sync::Arc;
//! use aerojson::{Document, DocumentType, FieldDef};
//! use serde_json::json;
//!
//! let doc_type = Arc::new(DocumentType::new(
//!     "users",
//!     "v1",
//!     vec![
//!         FieldDef::string("name").required(),
//!         FieldDef::string("password").exclude_to_json(),
//!     ],
//! ));
//!
//! let user = Document::with_values(doc_type, json!({ "name": "Ada", "password": "pw" })).unwrap();
//! assert_eq!(user.to_json().unwrap(), r#"{"name":"Ada"}"#);
//! ```

pub mod cli;
pub mod codec;
pub mod document;
pub mod exclusion;
pub mod observability;
pub mod schema;

pub use codec::{CodecError, CodecResult};
pub use document::{Document, DocumentError};
pub use exclusion::{Direction, ExclusionFlags, ExclusionResolver};
pub use schema::{DocumentType, FieldDef, FieldKind, FieldType, SchemaLoader};
