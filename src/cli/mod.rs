//! CLI module for aerojson
//!
//! Provides command-line interface for:
//! - serialize: documents on stdin -> filtered JSON on stdout
//! - deserialize: JSON on stdin -> document values on stdout
//! - inspect: visible field paths per direction

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, SchemaArgs};
pub use commands::{
    deserialize, deserialize_stream, inspect, inspect_report, run, run_command, serialize,
    serialize_stream,
};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_requests, write_error, write_response};
