//! JSON output.

use std::io::Write;

use anyhow::{Context, Result};

use crate::models::DnsResult;

/// Writes the results as a single-line JSON array followed by a newline.
pub fn write_json<W: Write>(results: &[DnsResult], writer: &mut W) -> Result<()> {
    serde_json::to_writer(&mut *writer, results).context("could not marshal results to JSON")?;
    writeln!(writer).context("could not write results")?;
    writer.flush().context("could not flush results")?;
    Ok(())
}
