// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log setup. Logs go to stderr; the spinner owns stdout.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::env;

/// Filter directive for the given `-v` count and `-q` flag.
pub fn level_directive(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `TWIRL_LOG` overrides the flags.
pub fn setup_logging(verbosity: u8, quiet: bool) {
    let filter = match env::log_filter() {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::new(level_directive(verbosity, quiet)),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
