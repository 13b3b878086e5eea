//! Observability for aerojson
//!
//! Logging goes through `tracing`. Every record of interest carries an
//! `event` field naming an [`Event`].
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on conversion results
//! 3. The library never installs a subscriber; binaries do

mod events;

pub use events::Event;

use tracing_subscriber::EnvFilter;

/// Accepted values for the configured log level
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. Returns false if a
/// subscriber was already installed.
pub fn init_logging(default_level: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
