//! Directional field exclusion
//!
//! Each field declaration carries three flags. For a direction, a field is
//! excluded when its directional flag or `exclude_json` is set:
//!
//! | flag                | Output | Input |
//! |---------------------|--------|-------|
//! | `exclude_to_json`   | hidden | kept  |
//! | `exclude_from_json` | kept   | ignored |
//! | `exclude_json`      | hidden | ignored |
//!
//! Exclusion on a container field (embedded document or list) removes the
//! whole container before any nested flag is consulted.

mod flags;
mod resolver;

pub use flags::{Direction, ExclusionFlags, KNOWN_ANNOTATIONS};
pub use resolver::ExclusionResolver;
