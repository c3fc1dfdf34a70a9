//! Human-readable colored output.

use std::io::Write;

use anyhow::Result;
use colored::*;

use crate::config::EMPTY_VALUE_MARKER;
use crate::models::DnsResult;

/// Prints results as colored text.
///
/// By default only records whose nameservers disagree are printed, followed by
/// `All records are identical` if there were none.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPrinter {
    /// Print identical results as well
    pub show_identical: bool,
}

impl TextPrinter {
    pub fn new(show_identical: bool) -> Self {
        Self { show_identical }
    }

    pub fn print<W: Write>(&self, results: &[DnsResult], writer: &mut W) -> Result<()> {
        let mut printed = 0usize;
        for result in results {
            if !self.show_identical && result.identical {
                continue;
            }
            self.print_result(result, writer)?;
            printed += 1;
        }

        if !self.show_identical && printed == 0 {
            writeln!(writer, "{}", "All records are identical".green())?;
        }

        writer.flush()?;
        Ok(())
    }

    fn print_result<W: Write>(&self, result: &DnsResult, writer: &mut W) -> Result<()> {
        let heading = format!("{} -> {}", result.record_type, result.host);
        if result.identical {
            writeln!(writer, "{}", heading.green())?;
        } else {
            writeln!(writer, "{}", "DIFFERENT".red())?;
            writeln!(writer, "{}", heading.red())?;
        }

        for response in &result.responses {
            let value = if response.value.is_empty() {
                EMPTY_VALUE_MARKER
            } else {
                response.value.as_str()
            };
            writeln!(
                writer,
                "{} <==> {}",
                value.yellow(),
                response.resolver.cyan()
            )?;
        }
        writeln!(writer, "---")?;
        Ok(())
    }
}
