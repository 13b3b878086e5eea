//! Schema error types
//!
//! Error codes:
//! - AERO_UNKNOWN_SCHEMA (REJECT)
//! - AERO_UNKNOWN_SCHEMA_VERSION (REJECT)
//! - AERO_SCHEMA_INVALID (REJECT)
//! - AERO_SCHEMA_IMMUTABLE (REJECT)
//! - AERO_SCHEMA_MALFORMED (FATAL)

use std::fmt;

/// Severity levels for schema errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Request rejected, caller may retry with a different input
    Reject,
    /// Schema directory unusable, startup must stop
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Schema ID not found
    AeroUnknownSchema,
    /// Schema version not found
    AeroUnknownSchemaVersion,
    /// Schema structure is invalid (duplicate or empty field names)
    AeroSchemaInvalid,
    /// Attempt to redefine an existing schema version
    AeroSchemaImmutable,
    /// Schema file could not be read or parsed
    AeroSchemaMalformed,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::AeroUnknownSchema => "AERO_UNKNOWN_SCHEMA",
            SchemaErrorCode::AeroUnknownSchemaVersion => "AERO_UNKNOWN_SCHEMA_VERSION",
            SchemaErrorCode::AeroSchemaInvalid => "AERO_SCHEMA_INVALID",
            SchemaErrorCode::AeroSchemaImmutable => "AERO_SCHEMA_IMMUTABLE",
            SchemaErrorCode::AeroSchemaMalformed => "AERO_SCHEMA_MALFORMED",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            SchemaErrorCode::AeroSchemaMalformed => Severity::Fatal,
            _ => Severity::Reject,
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema error type with full context
#[derive(Debug)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
    schema_id: Option<String>,
    schema_version: Option<String>,
}

impl SchemaError {
    /// Create an unknown schema error
    pub fn unknown_schema(schema_id: impl Into<String>) -> Self {
        let id = schema_id.into();
        Self {
            code: SchemaErrorCode::AeroUnknownSchema,
            message: format!("Schema '{}' not found", id),
            schema_id: Some(id),
            schema_version: None,
        }
    }

    /// Create an unknown schema version error
    pub fn unknown_version(schema_id: impl Into<String>, version: impl Into<String>) -> Self {
        let id = schema_id.into();
        let ver = version.into();
        Self {
            code: SchemaErrorCode::AeroUnknownSchemaVersion,
            message: format!("Schema '{}' version '{}' not found", id, ver),
            schema_id: Some(id),
            schema_version: Some(ver),
        }
    }

    /// Create an invalid structure error
    pub fn invalid_structure(
        schema_id: impl Into<String>,
        version: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let id = schema_id.into();
        let ver = version.into();
        Self {
            code: SchemaErrorCode::AeroSchemaInvalid,
            message: format!("Schema '{}' version '{}' is invalid: {}", id, ver, reason.into()),
            schema_id: Some(id),
            schema_version: Some(ver),
        }
    }

    /// Create a schema immutable error
    pub fn schema_immutable(schema_id: impl Into<String>, version: impl Into<String>) -> Self {
        let id = schema_id.into();
        let ver = version.into();
        Self {
            code: SchemaErrorCode::AeroSchemaImmutable,
            message: format!("Schema '{}' version '{}' is immutable", id, ver),
            schema_id: Some(id),
            schema_version: Some(ver),
        }
    }

    /// Create an error for an unreadable or malformed schema file
    pub fn malformed_schema(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::AeroSchemaMalformed,
            message: format!("Malformed schema file '{}': {}", path.into(), reason.into()),
            schema_id: None,
            schema_version: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the schema ID if applicable
    pub fn schema_id(&self) -> Option<&str> {
        self.schema_id.as_deref()
    }

    /// Returns the schema version if applicable
    pub fn schema_version(&self) -> Option<&str> {
        self.schema_version.as_deref()
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
