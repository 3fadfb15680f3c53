// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Frame decoration: ANSI colors, highlights and attributes.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::palette::{Attribute, Color, Highlight};

/// ANSI escape sequence helpers
pub mod escape {
    /// Carriage return + clear to end of line
    pub const CLEAR_LINE: &str = "\r\x1b[K";

    /// Hide the cursor
    pub const HIDE_CURSOR: &str = "\x1b[?25l";

    /// Show the cursor
    pub const SHOW_CURSOR: &str = "\x1b[?25h";

    /// Reset all attributes
    pub const RESET: &str = "\x1b[0m";

    /// Single SGR parameter
    pub fn sgr(code: u8) -> String {
        format!("\x1b[{}m", code)
    }
}

/// Caller-supplied formatter: receives the frame text, returns it decorated.
pub type ColorFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A palette entry or a custom formatting function.
#[derive(Clone)]
pub enum Paint<T> {
    Named(T),
    Custom(ColorFn),
}

impl<T: fmt::Display> Paint<T> {
    /// Lower-cased palette name, `None` for custom functions.
    pub fn name(&self) -> Option<String> {
        match self {
            Paint::Named(value) => Some(value.to_string()),
            Paint::Custom(_) => None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Paint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::Named(value) => f.debug_tuple("Named").field(value).finish(),
            Paint::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl<T: PartialEq> PartialEq for Paint<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Paint::Named(a), Paint::Named(b)) => a == b,
            (Paint::Custom(a), Paint::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Wrap `text` in SGR codes: foreground, then background, then attributes,
/// followed by a reset. Returns the input unchanged when nothing is set.
pub fn colored(
    text: &str,
    color: Option<Color>,
    on_color: Option<Highlight>,
    attrs: &BTreeSet<Attribute>,
) -> String {
    if color.is_none() && on_color.is_none() && attrs.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 16);
    if let Some(color) = color {
        out.push_str(&escape::sgr(color.code()));
    }
    if let Some(on_color) = on_color {
        out.push_str(&escape::sgr(on_color.code()));
    }
    for attr in attrs {
        out.push_str(&escape::sgr(attr.code()));
    }
    out.push_str(text);
    out.push_str(escape::RESET);
    out
}

/// How a frame gets decorated, resolved from the current style.
#[derive(Clone)]
pub enum Decoration {
    Named {
        color: Option<Color>,
        on_color: Option<Highlight>,
        attrs: BTreeSet<Attribute>,
    },
    Custom(ColorFn),
}

impl Decoration {
    /// A custom function on `color` wins over one on `on_color`; when either
    /// is custom, the palette values are ignored.
    pub fn resolve(
        color: Option<&Paint<Color>>,
        on_color: Option<&Paint<Highlight>>,
        attrs: &BTreeSet<Attribute>,
    ) -> Self {
        if let Some(Paint::Custom(f)) = color {
            return Decoration::Custom(Arc::clone(f));
        }
        if let Some(Paint::Custom(f)) = on_color {
            return Decoration::Custom(Arc::clone(f));
        }

        let color = match color {
            Some(Paint::Named(c)) => Some(*c),
            _ => None,
        };
        let on_color = match on_color {
            Some(Paint::Named(h)) => Some(*h),
            _ => None,
        };
        Decoration::Named {
            color,
            on_color,
            attrs: attrs.clone(),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            Decoration::Named {
                color,
                on_color,
                attrs,
            } => colored(text, *color, *on_color, attrs),
            Decoration::Custom(f) => f(text),
        }
    }
}

#[cfg(test)]
#[path = "decorate_tests.rs"]
mod tests;
