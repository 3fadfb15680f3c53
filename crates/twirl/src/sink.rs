// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal output targets for rendered spinner lines.

use crossterm::{cursor, queue, terminal};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

use crate::decorate::escape;

/// Destination for composed lines and cursor control.
pub trait TerminalSink: Send {
    fn write(&mut self, line: &str) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
    /// Return to column 0 and erase the rest of the line
    fn clear_line(&mut self) -> io::Result<()>;
    fn hide_cursor(&mut self) -> io::Result<()>;
    fn show_cursor(&mut self) -> io::Result<()>;
}

/// Writes to standard output.
#[derive(Debug)]
pub struct StdoutSink {
    out: io::Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSink for StdoutSink {
    fn write(&mut self, line: &str) -> io::Result<()> {
        self.out.write_all(line.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn clear_line(&mut self) -> io::Result<()> {
        self.out.write_all(b"\r")?;
        queue!(self.out, terminal::Clear(terminal::ClearType::UntilNewLine))
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, cursor::Hide)
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        queue!(self.out, cursor::Show)
    }
}

#[derive(Debug, Default)]
struct Recorded {
    writes: Vec<String>,
    output: String,
    flushes: usize,
    cursor_hidden: bool,
}

/// In-memory sink that records everything written to it.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// spinner owns another.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    inner: Arc<Mutex<Recorded>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written, including control sequences, in order
    pub fn output(&self) -> String {
        self.inner.lock().output.clone()
    }

    /// Lines passed to `write`, excluding control sequences
    pub fn writes(&self) -> Vec<String> {
        self.inner.lock().writes.clone()
    }

    pub fn flushes(&self) -> usize {
        self.inner.lock().flushes
    }

    pub fn cursor_hidden(&self) -> bool {
        self.inner.lock().cursor_hidden
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.writes.clear();
        inner.output.clear();
    }
}

impl TerminalSink for MemorySink {
    fn write(&mut self, line: &str) -> io::Result<()> {
        let mut inner = self.inner.lock();
        inner.writes.push(line.to_string());
        inner.output.push_str(line);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.lock().flushes += 1;
        Ok(())
    }

    fn clear_line(&mut self) -> io::Result<()> {
        self.inner.lock().output.push_str(escape::CLEAR_LINE);
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        let mut inner = self.inner.lock();
        inner.output.push_str(escape::HIDE_CURSOR);
        inner.cursor_hidden = true;
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        let mut inner = self.inner.lock();
        inner.output.push_str(escape::SHOW_CURSOR);
        inner.cursor_hidden = false;
        Ok(())
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
