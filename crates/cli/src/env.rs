// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! Every environment variable the CLI reads is named here.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

pub use names::*;

/// `TWIRL_LOG`: log filter directive, overrides `-v`/`-q`.
pub fn log_filter() -> Option<String> {
    std::env::var(names::TWIRL_LOG)
        .ok()
        .filter(|v| !v.is_empty())
}

/// `NO_COLOR` (non-empty) or `ANSI_COLORS_DISABLED` (any value) turns off
/// frame decoration.
pub fn colors_disabled() -> bool {
    colors_disabled_by(
        std::env::var_os(names::NO_COLOR).as_deref(),
        std::env::var_os(names::ANSI_COLORS_DISABLED).as_deref(),
    )
}

fn colors_disabled_by(
    no_color: Option<&std::ffi::OsStr>,
    ansi_colors_disabled: Option<&std::ffi::OsStr>,
) -> bool {
    no_color.is_some_and(|v| !v.is_empty()) || ansi_colors_disabled.is_some()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
