// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use twirl::{FramesConfig, SpinnerConfig};

use crate::env;

/// Terminal spinner
#[derive(Parser, Debug)]
#[command(name = "twirl", version, about = "Run a command under an animated spinner")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Animate while a command runs (or for --duration-ms), then finalize
    Run(RunArgs),

    /// List the built-in spinners
    List,
}

#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Spinner config file (TOML, or JSON with a .json extension)
    #[arg(long, env = env::TWIRL_CONFIG)]
    pub config: Option<PathBuf>,

    /// Built-in spinner name (see `twirl list`)
    #[arg(long, short = 's')]
    pub spinner: Option<String>,

    /// Frames, one per character
    #[arg(long, requires = "interval")]
    pub frames: Option<String>,

    /// Milliseconds per frame
    #[arg(long, requires = "frames")]
    pub interval: Option<u64>,

    /// Text shown next to the frame
    #[arg(long, short = 't')]
    pub text: Option<String>,

    /// Frame color
    #[arg(long)]
    pub color: Option<String>,

    /// Frame highlight (on_<color> or on_light_<color>)
    #[arg(long)]
    pub on_color: Option<String>,

    /// Text attribute (repeatable)
    #[arg(long = "attr")]
    pub attrs: Vec<String>,

    /// Reverse each frame
    #[arg(long)]
    pub reverse: bool,

    /// Render the frame after the text
    #[arg(long)]
    pub right: bool,

    /// Animate for this long when no command is given
    #[arg(long, default_value_t = 1000)]
    pub duration_ms: u64,

    /// Glyph shown on success
    #[arg(long, default_value = twirl::DEFAULT_OK_GLYPH)]
    pub ok_glyph: String,

    /// Glyph shown on failure
    #[arg(long, default_value = twirl::DEFAULT_FAIL_GLYPH)]
    pub fail_glyph: String,

    /// Command to run, after `--`
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl RunArgs {
    /// Layer the command-line options over a config file's values.
    pub fn overlay(&self, mut config: SpinnerConfig) -> SpinnerConfig {
        if let Some(name) = &self.spinner {
            config.spinner = Some(name.clone());
            config.frames = None;
            config.interval = None;
        }
        if let (Some(frames), Some(interval)) = (&self.frames, self.interval) {
            config.frames = Some(FramesConfig::Glyphs(frames.clone()));
            config.interval = Some(interval);
        }
        if let Some(text) = &self.text {
            config.text = Some(text.clone());
        }
        if let Some(color) = &self.color {
            config.color = Some(color.clone());
        }
        if let Some(on_color) = &self.on_color {
            config.on_color = Some(on_color.clone());
        }
        if !self.attrs.is_empty() {
            config.attrs = self.attrs.clone();
        }
        config.reverse |= self.reverse;
        config.right |= self.right;
        config
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
