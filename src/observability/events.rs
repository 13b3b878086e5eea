//! Observability events for aerojson
//!
//! Events are explicit and typed. They are attached to `tracing` records
//! as the `event` field so log consumers can match on a stable name.

use std::fmt;

/// Observable events in aerojson
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Schemas
    /// Schema directory loaded
    SchemasLoaded,
    /// Document type registered
    SchemaRegistered,
    /// Document type written to disk
    SchemaSaved,
    /// Schema file carries an `exclude_*` key with no meaning
    UnknownAnnotation,

    // Conversion
    /// Field left out of a conversion by its exclusion flags
    FieldSkipped,
    /// Document serialized to JSON
    DocumentSerialized,
    /// Document built from JSON
    DocumentDeserialized,

    // CLI
    /// Request rejected before conversion
    RequestRejected,
}

impl Event {
    /// Returns the event name as it appears in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::SchemasLoaded => "SCHEMAS_LOADED",
            Event::SchemaRegistered => "SCHEMA_REGISTERED",
            Event::SchemaSaved => "SCHEMA_SAVED",
            Event::UnknownAnnotation => "SCHEMA_UNKNOWN_ANNOTATION",

            Event::FieldSkipped => "FIELD_SKIPPED",
            Event::DocumentSerialized => "DOCUMENT_SERIALIZED",
            Event::DocumentDeserialized => "DOCUMENT_DESERIALIZED",

            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_event_names_are_unique() {
        let events = [
            Event::ConfigLoaded,
            Event::SchemasLoaded,
            Event::SchemaRegistered,
            Event::SchemaSaved,
            Event::UnknownAnnotation,
            Event::FieldSkipped,
            Event::DocumentSerialized,
            Event::DocumentDeserialized,
            Event::RequestRejected,
        ];

        let names: HashSet<&str> = events.iter().map(Event::as_str).collect();
        assert_eq!(names.len(), events.len());
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::FieldSkipped), "FIELD_SKIPPED");
    }
}
