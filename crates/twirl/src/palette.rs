// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed palette of foreground colors, highlights and text attributes.
//!
//! Names are matched case-insensitively and always displayed lower-cased.
//! Each entry maps to its SGR parameter code.

use std::fmt;
use std::str::FromStr;

use crate::error::SpinnerError;

/// Foreground color for the spinner frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    /// SGR foreground code (31-37)
    pub fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
        }
    }

    pub fn names() -> Vec<&'static str> {
        Color::ALL.iter().map(|c| c.name()).collect()
    }
}

impl FromStr for Color {
    type Err = SpinnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Color::ALL
            .into_iter()
            .find(|c| c.name() == lower)
            .ok_or_else(|| SpinnerError::invalid("color", s, &Color::names()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Background highlight, written `on_<color>` or `on_light_<color>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Highlight {
    On(Color),
    OnLight(Color),
}

impl Highlight {
    pub fn all() -> Vec<Highlight> {
        let normal = Color::ALL.into_iter().map(Highlight::On);
        let light = Color::ALL.into_iter().map(Highlight::OnLight);
        normal.chain(light).collect()
    }

    pub fn name(self) -> String {
        match self {
            Highlight::On(c) => format!("on_{}", c.name()),
            Highlight::OnLight(c) => format!("on_light_{}", c.name()),
        }
    }

    /// SGR background code (41-47, bright 101-107)
    pub fn code(self) -> u8 {
        match self {
            Highlight::On(c) => c.code() + 10,
            Highlight::OnLight(c) => c.code() + 70,
        }
    }

    pub fn names() -> Vec<String> {
        Highlight::all().into_iter().map(Highlight::name).collect()
    }
}

impl FromStr for Highlight {
    type Err = SpinnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        let color = |rest: &str| Color::ALL.into_iter().find(|c| c.name() == rest);

        let parsed = if let Some(rest) = lower.strip_prefix("on_light_") {
            color(rest).map(Highlight::OnLight)
        } else if let Some(rest) = lower.strip_prefix("on_") {
            color(rest).map(Highlight::On)
        } else {
            None
        };

        parsed.ok_or_else(|| {
            let names = Highlight::names();
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            SpinnerError::invalid("highlight", s, &names)
        })
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Text attribute. Ordering follows SGR code so attribute sets render
/// deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Bold,
    Dark,
    Underline,
    Blink,
    Reverse,
    Concealed,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Bold,
        Attribute::Dark,
        Attribute::Underline,
        Attribute::Blink,
        Attribute::Reverse,
        Attribute::Concealed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Attribute::Bold => "bold",
            Attribute::Dark => "dark",
            Attribute::Underline => "underline",
            Attribute::Blink => "blink",
            Attribute::Reverse => "reverse",
            Attribute::Concealed => "concealed",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Attribute::Bold => 1,
            Attribute::Dark => 2,
            Attribute::Underline => 4,
            Attribute::Blink => 5,
            Attribute::Reverse => 7,
            Attribute::Concealed => 8,
        }
    }

    pub fn names() -> Vec<&'static str> {
        Attribute::ALL.iter().map(|a| a.name()).collect()
    }
}

impl FromStr for Attribute {
    type Err = SpinnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Attribute::ALL
            .into_iter()
            .find(|a| a.name() == lower)
            .ok_or_else(|| SpinnerError::invalid("attribute", s, &Attribute::names()))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;
