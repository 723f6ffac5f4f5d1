//! Player-facing output channel.
//!
//! Game components never touch stdout directly. They append lines to a
//! [`Transcript`], and the engine flushes it to whatever writer it was given.

use std::io::Write;
use tracing::instrument;

/// Buffered lines of player-facing text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line of text.
    pub fn say(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Lines written since the last flush.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns true if any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    /// Removes and returns all pending lines.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// Writes all pending lines to `out`, newline-terminated, and clears the buffer.
    #[instrument(skip_all, fields(pending = self.lines.len()))]
    pub fn flush_to<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        for line in self.lines.drain(..) {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}
