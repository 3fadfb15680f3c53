// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal spinner
//!
//! Renders an animated sequence of frames next to optional text on a
//! background thread while the caller keeps working, then finalizes the line
//! with a success, failure or custom glyph.
//!
//! ```no_run
//! use twirl::Spinner;
//!
//! # fn main() -> twirl::Result<()> {
//! let spinner = Spinner::builder()
//!     .text("Loading")
//!     .color("cyan")
//!     .build()?;
//!
//! let answer = spinner.run(|| 6 * 7)?;
//! spinner.ok_with("✔")?;
//! # let _ = answer;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod decorate;
pub mod engine;
pub mod error;
pub mod frames;
pub mod palette;
pub mod signals;
pub mod sink;
pub mod spinner;

pub use config::{FramesConfig, SpinnerConfig};
pub use decorate::{colored, ColorFn, Decoration, Paint};
pub use engine::{Side, State, Style};
pub use error::{Result, SpinnerError};
pub use frames::{Definition, FrameInput, RawFrame, SpinnerDefinition};
pub use palette::{Attribute, Color, Highlight};
pub use signals::{handlers, SigMap, SignalHandler};
pub use sink::{MemorySink, StdoutSink, TerminalSink};
pub use spinner::{
    HiddenGuard, Spinner, SpinnerBuilder, SpinnerGuard, DEFAULT_FAIL_GLYPH, DEFAULT_OK_GLYPH,
};
