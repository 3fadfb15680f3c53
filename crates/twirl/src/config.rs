// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spinner configuration files (TOML or JSON).
//!
//! ```toml
//! spinner = "arc"          # catalog entry
//! text = "Fetching"
//! color = "cyan"
//! attrs = ["bold"]
//! right = false
//! ```
//!
//! `frames` plus `interval` override the catalog entry. Only one of the two
//! selects the default definition.

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::frames::{FrameInput, SpinnerDefinition};
use crate::spinner::SpinnerBuilder;

/// Frames as written in a config file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FramesConfig {
    /// One frame per character
    Glyphs(String),
    /// One frame per element
    List(Vec<String>),
}

impl From<FramesConfig> for FrameInput {
    fn from(frames: FramesConfig) -> Self {
        match frames {
            FramesConfig::Glyphs(s) => FrameInput::from(s),
            FramesConfig::List(items) => FrameInput::from(items),
        }
    }
}

/// Top-level spinner configuration
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SpinnerConfig {
    /// Catalog entry name
    #[serde(default)]
    pub spinner: Option<String>,

    #[serde(default)]
    pub frames: Option<FramesConfig>,

    /// Milliseconds per frame
    #[serde(default)]
    pub interval: Option<u64>,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub on_color: Option<String>,

    #[serde(default)]
    pub attrs: Vec<String>,

    #[serde(default)]
    pub reverse: bool,

    #[serde(default)]
    pub right: bool,
}

impl SpinnerConfig {
    /// Load from a file; `.json` files are parsed as JSON, anything else as
    /// TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = if path.extension().is_some_and(|e| e == "json") {
            Self::from_json(&content)?
        } else {
            Self::from_toml(&content)?
        };
        debug!(path = %path.display(), "loaded spinner config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Fill `builder` with every option this config sets. Validation
    /// happens when the builder is built.
    pub fn apply(self, mut builder: SpinnerBuilder) -> SpinnerBuilder {
        if self.frames.is_some() || self.interval.is_some() {
            builder = match (self.frames, self.interval) {
                (Some(frames), Some(interval)) => builder.frames(frames, interval),
                _ => builder.spinner(SpinnerDefinition::UseDefault),
            };
        } else if let Some(name) = self.spinner {
            builder = builder.named(name);
        }

        if let Some(text) = self.text {
            builder = builder.text(text);
        }
        if let Some(color) = self.color {
            builder = builder.color(color);
        }
        if let Some(on_color) = self.on_color {
            builder = builder.on_color(on_color);
        }
        if !self.attrs.is_empty() {
            builder = builder.attrs(self.attrs);
        }
        builder.reverse(self.reverse).right(self.right)
    }

    pub fn builder(self) -> SpinnerBuilder {
        self.apply(SpinnerBuilder::default())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
