//! CLI command implementations
//!
//! Every command loads the configuration, installs logging, loads the
//! schema directory and resolves the requested document type before doing
//! any work. Failures up to that point are fatal. After that, each input
//! line is converted independently and a bad line only produces an error
//! response.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use serde_json::{json, Value};

use crate::codec::{self, CodecResult};
use crate::document::Document;
use crate::exclusion::ExclusionResolver;
use crate::observability::{init_logging, Event};
use crate::schema::{DocumentType, SchemaLoader};

use super::args::{Command, SchemaArgs};
use super::config::Config;
use super::errors::{CliErrorCode, CliResult};
use super::io::{read_requests, write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serialize(args) => serialize(&args),
        Command::Deserialize(args) => deserialize(&args),
        Command::Inspect(args) => inspect(&args),
    }
}

/// Serialize documents read from stdin
pub fn serialize(args: &SchemaArgs) -> CliResult<()> {
    let (_, doc_type) = prepare(args)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    serialize_stream(doc_type, stdin.lock(), &mut stdout)
}

/// Deserialize JSON objects read from stdin
pub fn deserialize(args: &SchemaArgs) -> CliResult<()> {
    let (_, doc_type) = prepare(args)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    deserialize_stream(doc_type, stdin.lock(), &mut stdout)
}

/// Report the visible field paths of a document type.
///
/// This is the only command that honors `pretty`: it writes a single
/// response, so multi-line output cannot break the framing.
pub fn inspect(args: &SchemaArgs) -> CliResult<()> {
    let (config, doc_type) = prepare(args)?;
    let mut stdout = io::stdout();
    write_response(&mut stdout, inspect_report(&doc_type), config.pretty)
}

fn prepare(args: &SchemaArgs) -> CliResult<(Config, Arc<DocumentType>)> {
    let config = Config::load(&args.config)?;
    init_logging(&config.log_level);
    tracing::info!(
        event = %Event::ConfigLoaded,
        path = %args.config.display(),
        schema_dir = %config.schema_dir,
        "configuration loaded"
    );

    let mut loader = SchemaLoader::new(config.schema_path());
    loader.load_all()?;
    let doc_type = loader.resolve(&args.schema, &args.schema_version)?;

    Ok((config, doc_type))
}

/// Builds a document from each input object and writes its JSON representation.
///
/// Responses are always compact, one per line.
pub fn serialize_stream<R: BufRead, W: Write>(
    doc_type: Arc<DocumentType>,
    reader: R,
    writer: &mut W,
) -> CliResult<()> {
    convert_stream(reader, writer, |value| {
        let document = Document::with_values(Arc::clone(&doc_type), value)?;
        Ok(codec::to_json_value(&document))
    })
}

/// Deserializes each input object and writes the values the document holds.
pub fn deserialize_stream<R: BufRead, W: Write>(
    doc_type: Arc<DocumentType>,
    reader: R,
    writer: &mut W,
) -> CliResult<()> {
    convert_stream(reader, writer, |value| {
        let document = codec::from_json_value(Arc::clone(&doc_type), &value)?;
        Ok(Value::Object(document.stored_values()))
    })
}

fn convert_stream<R, W, F>(reader: R, writer: &mut W, mut convert: F) -> CliResult<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(Value) -> CodecResult<Value>,
{
    for request in read_requests(reader) {
        match request {
            Ok(value) => match convert(value) {
                Ok(data) => write_response(writer, data, false)?,
                Err(e) => {
                    tracing::warn!(
                        event = %Event::RequestRejected,
                        code = e.code(),
                        error = %e,
                        "request rejected"
                    );
                    write_error(writer, e.code(), &e.to_string())?;
                }
            },
            Err(e) if *e.code() == CliErrorCode::IoError => {
                write_error(writer, e.code_str(), e.message())?;
                return Err(e);
            }
            Err(e) => {
                tracing::warn!(
                    event = %Event::RequestRejected,
                    code = e.code_str(),
                    error = %e,
                    "request rejected"
                );
                write_error(writer, e.code_str(), e.message())?;
            }
        }
    }

    Ok(())
}

/// Visible field paths for both directions
pub fn inspect_report(doc_type: &DocumentType) -> Value {
    json!({
        "schema_id": doc_type.schema_id,
        "schema_version": doc_type.schema_version,
        "output": ExclusionResolver::output().visible_paths(doc_type),
        "input": ExclusionResolver::input().visible_paths(doc_type),
    })
}
