//! JSON I/O handling for CLI
//!
//! - Input: one JSON value per line, blank lines skipped
//! - Output: one JSON response object per line
//! - UTF-8 only

use std::io::{BufRead, Write};

use serde_json::Value;

use super::errors::{CliError, CliResult};
use crate::codec::CodecError;

/// Read JSON requests line by line.
///
/// A line that is not valid JSON yields a conversion error; a failed read
/// yields an I/O error.
pub fn read_requests<R: BufRead>(reader: R) -> impl Iterator<Item = CliResult<Value>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => Some(
            serde_json::from_str::<Value>(&line).map_err(|e| CliError::from(CodecError::from(e))),
        ),
        Err(e) => Some(Err(CliError::from(e))),
    })
}

/// Write a success response
pub fn write_response<W: Write>(writer: &mut W, data: Value, pretty: bool) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });
    write_line(writer, &response, pretty)
}

/// Write an error response
pub fn write_error<W: Write>(writer: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });
    write_line(writer, &response, false)
}

fn write_line<W: Write>(writer: &mut W, response: &Value, pretty: bool) -> CliResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, response)?;
    } else {
        serde_json::to_writer(&mut *writer, response)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
