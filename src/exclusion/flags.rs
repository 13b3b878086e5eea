//! Exclusion flags and conversion directions
//!
//! Every declared field carries three independent flags:
//! - exclude_to_json: hidden when serializing (Output)
//! - exclude_from_json: ignored when deserializing (Input)
//! - exclude_json: hidden in both directions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a document/JSON conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Document -> JSON
    Output,
    /// JSON -> Document
    Input,
}

impl Direction {
    /// Both directions, output first.
    pub const ALL: [Direction; 2] = [Direction::Output, Direction::Input];

    /// Returns the direction name for logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Output => "output",
            Direction::Input => "input",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Directional exclusion metadata attached to a field declaration.
///
/// Flags may be combined freely. Setting `exclude_to_json` and
/// `exclude_from_json` together is equivalent to `exclude_json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExclusionFlags {
    /// Suppressed when serializing
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclude_to_json: bool,
    /// Never assigned when deserializing
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclude_from_json: bool,
    /// Suppressed in both directions
    #[serde(default, skip_serializing_if = "is_false")]
    pub exclude_json: bool,
}

impl ExclusionFlags {
    /// Flags with every exclusion off.
    pub const NONE: ExclusionFlags = ExclusionFlags {
        exclude_to_json: false,
        exclude_from_json: false,
        exclude_json: false,
    };

    pub fn new(exclude_to_json: bool, exclude_from_json: bool, exclude_json: bool) -> Self {
        Self {
            exclude_to_json,
            exclude_from_json,
            exclude_json,
        }
    }

    /// Effective exclusion for a direction: the direction flag OR `exclude_json`.
    pub fn excludes(&self, direction: Direction) -> bool {
        let directional = match direction {
            Direction::Output => self.exclude_to_json,
            Direction::Input => self.exclude_from_json,
        };
        directional || self.exclude_json
    }

    /// Returns true if no flag is set
    pub fn is_empty(&self) -> bool {
        !(self.exclude_to_json || self.exclude_from_json || self.exclude_json)
    }

    /// Union of two flag sets
    pub fn union(self, other: ExclusionFlags) -> Self {
        Self {
            exclude_to_json: self.exclude_to_json || other.exclude_to_json,
            exclude_from_json: self.exclude_from_json || other.exclude_from_json,
            exclude_json: self.exclude_json || other.exclude_json,
        }
    }
}

/// Annotation keys recognized in schema files.
pub const KNOWN_ANNOTATIONS: [&str; 3] = ["exclude_to_json", "exclude_from_json", "exclude_json"];

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_never_excludes() {
        let flags = ExclusionFlags::NONE;
        assert!(flags.is_empty());
        assert!(!flags.excludes(Direction::Output));
        assert!(!flags.excludes(Direction::Input));
    }

    #[test]
    fn test_directional_flags_are_independent() {
        let to = ExclusionFlags::new(true, false, false);
        assert!(to.excludes(Direction::Output));
        assert!(!to.excludes(Direction::Input));

        let from = ExclusionFlags::new(false, true, false);
        assert!(!from.excludes(Direction::Output));
        assert!(from.excludes(Direction::Input));
    }

    #[test]
    fn test_exclude_json_covers_both_directions() {
        let both = ExclusionFlags::new(false, false, true);
        for direction in Direction::ALL {
            assert!(both.excludes(direction));
        }
    }

    #[test]
    fn test_redundant_flags_are_idempotent() {
        let redundant = ExclusionFlags::new(true, true, true);
        let both = ExclusionFlags::new(false, false, true);
        for direction in Direction::ALL {
            assert_eq!(redundant.excludes(direction), both.excludes(direction));
        }
    }

    #[test]
    fn test_union() {
        let flags =
            ExclusionFlags::new(true, false, false).union(ExclusionFlags::new(false, true, false));
        assert!(flags.excludes(Direction::Output));
        assert!(flags.excludes(Direction::Input));
        assert!(!flags.exclude_json);
    }

    #[test]
    fn test_false_flags_are_not_serialized() {
        let json = serde_json::to_value(ExclusionFlags::new(true, false, false)).unwrap();
        assert_eq!(json, serde_json::json!({ "exclude_to_json": true }));

        let parsed: ExclusionFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, ExclusionFlags::NONE);
    }
}
