//! CLI argument definitions using clap
//!
//! Commands:
//! - aerojson serialize --schema <id> --schema-version <v> [--config <path>]
//! - aerojson deserialize --schema <id> --schema-version <v> [--config <path>]
//! - aerojson inspect --schema <id> --schema-version <v> [--config <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// aerojson - Directional field exclusion for document/JSON conversion
#[derive(Parser, Debug)]
#[command(name = "aerojson")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read documents from stdin (one JSON object per line) and write their
    /// JSON representation
    Serialize(SchemaArgs),

    /// Read JSON objects from stdin and write the resulting document values
    Deserialize(SchemaArgs),

    /// Write the field paths visible in each direction
    Inspect(SchemaArgs),
}

/// Arguments selecting a configuration and a document type
#[derive(Args, Debug, Clone)]
pub struct SchemaArgs {
    /// Path to configuration file
    #[arg(long, default_value = "./aerojson.json")]
    pub config: PathBuf,

    /// Schema identifier
    #[arg(long)]
    pub schema: String,

    /// Schema version
    #[arg(long)]
    pub schema_version: String,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
