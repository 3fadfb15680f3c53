// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `twirl` command-line front end.
//!
//! Runs a command (or waits) under an animated spinner, relays the command's
//! output above the animation and finalizes with an OK or FAIL glyph.

#[doc(hidden)]
pub mod cli;
#[doc(hidden)]
pub mod env;
#[doc(hidden)]
pub mod logging;
#[doc(hidden)]
pub mod output;
#[doc(hidden)]
pub mod run;
