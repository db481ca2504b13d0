//! JSON output for CLI commands
//!
//! - One JSON object per command on stdout
//! - UTF-8 only

use std::io::Write;

use serde::Serialize;

use super::errors::CliResult;

/// Write a JSON value followed by a newline
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
