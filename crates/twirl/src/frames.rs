// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spinner frame definitions and the infinite frame cycle.
//!
//! A definition is either fully valid (non-empty frames and a positive
//! interval) or replaced wholesale by the default braille cycle. There is no
//! per-field fallback.

use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;

/// Default animation frames (braille dots)
pub const DEFAULT_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Default per-frame interval in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 80;

/// One element of a frame list as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawFrame {
    Text(String),
    Bytes(Vec<u8>),
}

impl RawFrame {
    fn decode(self) -> Result<String> {
        match self {
            RawFrame::Text(text) => Ok(text),
            RawFrame::Bytes(bytes) => Ok(String::from_utf8(bytes)?),
        }
    }
}

/// Caller frame input: a string yields one frame per character, a list
/// yields one frame per element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameInput {
    Glyphs(String),
    List(Vec<RawFrame>),
}

impl FrameInput {
    fn is_empty(&self) -> bool {
        match self {
            FrameInput::Glyphs(s) => s.is_empty(),
            FrameInput::List(items) => items.is_empty(),
        }
    }

    fn into_frames(self) -> Result<Vec<String>> {
        match self {
            FrameInput::Glyphs(s) => Ok(s.chars().map(String::from).collect()),
            FrameInput::List(items) => items.into_iter().map(RawFrame::decode).collect(),
        }
    }
}

impl From<&str> for FrameInput {
    fn from(s: &str) -> Self {
        FrameInput::Glyphs(s.to_string())
    }
}

impl From<String> for FrameInput {
    fn from(s: String) -> Self {
        FrameInput::Glyphs(s)
    }
}

impl From<Vec<&str>> for FrameInput {
    fn from(items: Vec<&str>) -> Self {
        FrameInput::List(items.into_iter().map(|s| RawFrame::Text(s.to_string())).collect())
    }
}

impl From<&[&str]> for FrameInput {
    fn from(items: &[&str]) -> Self {
        FrameInput::from(items.to_vec())
    }
}

impl From<Vec<String>> for FrameInput {
    fn from(items: Vec<String>) -> Self {
        FrameInput::List(items.into_iter().map(RawFrame::Text).collect())
    }
}

impl From<Vec<Vec<u8>>> for FrameInput {
    fn from(items: Vec<Vec<u8>>) -> Self {
        FrameInput::List(items.into_iter().map(RawFrame::Bytes).collect())
    }
}

impl From<&[&[u8]]> for FrameInput {
    fn from(items: &[&[u8]]) -> Self {
        FrameInput::List(items.iter().map(|b| RawFrame::Bytes(b.to_vec())).collect())
    }
}

impl From<Vec<RawFrame>> for FrameInput {
    fn from(items: Vec<RawFrame>) -> Self {
        FrameInput::List(items)
    }
}

/// A valid animation: at least one frame and a non-zero interval.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Definition {
    frames: Arc<[String]>,
    interval: Duration,
}

impl Definition {
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// A fresh cycle, starting at the first frame.
    pub fn cycle(&self) -> FrameCycle {
        FrameCycle {
            frames: Arc::clone(&self.frames),
            pos: 0,
        }
    }
}

impl Default for Definition {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES.iter().map(|f| f.to_string()).collect(),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}

/// Validity is decided once, at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpinnerDefinition {
    Valid(Definition),
    UseDefault,
}

impl SpinnerDefinition {
    /// Validate caller input. Empty frames or a zero interval select the
    /// default definition; undecodable byte frames are an error.
    pub fn new(frames: impl Into<FrameInput>, interval_ms: u64) -> Result<Self> {
        let frames = frames.into();
        if frames.is_empty() || interval_ms == 0 {
            return Ok(SpinnerDefinition::UseDefault);
        }

        let frames = frames.into_frames()?;
        Ok(SpinnerDefinition::Valid(Definition {
            frames: frames.into(),
            interval: Duration::from_millis(interval_ms),
        }))
    }

    /// Build from optional parts; any missing part selects the default.
    pub fn from_parts(frames: Option<FrameInput>, interval_ms: Option<u64>) -> Result<Self> {
        match (frames, interval_ms) {
            (Some(frames), Some(interval_ms)) => Self::new(frames, interval_ms),
            _ => Ok(SpinnerDefinition::UseDefault),
        }
    }

    pub fn resolve(&self) -> Definition {
        match self {
            SpinnerDefinition::Valid(definition) => definition.clone(),
            SpinnerDefinition::UseDefault => Definition::default(),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, SpinnerDefinition::UseDefault)
    }
}

impl From<Definition> for SpinnerDefinition {
    fn from(definition: Definition) -> Self {
        SpinnerDefinition::Valid(definition)
    }
}

/// Infinite, cyclic production of frames.
#[derive(Clone, Debug)]
pub struct FrameCycle {
    frames: Arc<[String]>,
    pos: usize,
}

impl Iterator for FrameCycle {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        // Definition guarantees at least one frame.
        let frame = self.frames.get(self.pos)?.clone();
        self.pos = (self.pos + 1) % self.frames.len();
        Some(frame)
    }
}

#[cfg(test)]
#[path = "frames_tests.rs"]
mod tests;
