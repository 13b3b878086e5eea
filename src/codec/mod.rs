//! Document/JSON conversion
//!
//! The serializer consults the exclusion resolver in the output direction,
//! the deserializer in the input direction. Parsing is the only failure
//! mode; exclusion itself never fails.

mod deserializer;
mod errors;
mod serializer;

pub use deserializer::{from_json, from_json_value};
pub use errors::{CodecError, CodecResult};
pub use serializer::{to_json, to_json_pretty, to_json_value};
