// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output and the `twirl list` table.
//!
//! Diagnostics go to stderr so they never share a line with the spinner.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use twirl::{colored, Color, Definition};

/// Severity of a diagnostic line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }

    fn color(self) -> Color {
        match self {
            Severity::Error => Color::Red,
            Severity::Warning => Color::Yellow,
        }
    }
}

pub fn print_error(msg: impl Display) {
    report(Severity::Error, msg);
}

pub fn print_warning(msg: impl Display) {
    report(Severity::Warning, msg);
}

/// Write one diagnostic to stderr, colored when stderr is a terminal.
fn report(severity: Severity, msg: impl Display) {
    let stderr = io::stderr();
    let colorize = stderr.is_terminal();
    // Nowhere left to report a failed write to stderr.
    let _ = write_diagnostic(&mut stderr.lock(), severity, msg, colorize);
}

fn write_diagnostic<W: Write>(
    writer: &mut W,
    severity: Severity,
    msg: impl Display,
    colorize: bool,
) -> io::Result<()> {
    let line = format!("{}: {msg}", severity.label());
    if colorize {
        writeln!(writer, "{}", colored(&line, Some(severity.color()), None, &BTreeSet::new()))
    } else {
        writeln!(writer, "{line}")
    }
}

/// One row per spinner: name, interval, then the frames separated by spaces.
pub fn write_catalog<'a, W: Write>(
    writer: &mut W,
    entries: impl IntoIterator<Item = (&'a str, &'a Definition)>,
) -> io::Result<()> {
    for (name, definition) in entries {
        writeln!(
            writer,
            "{:<14} {:>4}ms  {}",
            name,
            definition.interval().as_millis(),
            definition.frames().join(" ")
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
