//! Result presentation.
//!
//! Two renderings of the same result sequence:
//! - JSON (`write_json`): the full result list, for programmatic use
//! - Text (`TextPrinter`): colored, human-readable, optionally hiding identical records

mod json;
mod text;

use std::io::{self, ErrorKind, Write};

pub use json::write_json;
pub use text::TextPrinter;

/// Writer wrapper that treats a closed pipe as success.
///
/// Lets `dnscompare config.toml --json | head` exit cleanly.
pub struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}
