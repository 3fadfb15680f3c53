// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing spinner handle and builder.

use std::collections::BTreeSet;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tracing::warn;

use crate::catalog;
use crate::decorate::{ColorFn, Paint};
use crate::engine::{Side, SpinnerEngine, State, Style};
use crate::error::Result;
use crate::frames::{Definition, FrameInput, SpinnerDefinition};
use crate::palette::{Attribute, Color, Highlight};
use crate::signals::{SigMap, SignalHandler};
use crate::sink::{StdoutSink, TerminalSink};

/// Glyph written by [`Spinner::ok`]
pub const DEFAULT_OK_GLYPH: &str = "OK";

/// Glyph written by [`Spinner::fail`]
pub const DEFAULT_FAIL_GLYPH: &str = "FAIL";

/// Handle to a spinner. Clones share the same engine; dropping the last
/// handle stops a running animation.
#[derive(Clone)]
pub struct Spinner {
    engine: Arc<SpinnerEngine>,
}

impl Spinner {
    /// Default spinner on stdout: braille frames, no text, no color.
    pub fn new() -> Self {
        Self::from_engine(Arc::new(SpinnerEngine::new(
            Definition::default(),
            Style::default(),
            Box::new(StdoutSink::new()),
            SigMap::new(),
        )))
    }

    pub fn builder() -> SpinnerBuilder {
        SpinnerBuilder::default()
    }

    pub(crate) fn from_engine(engine: Arc<SpinnerEngine>) -> Self {
        Self { engine }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start the background animation. No-op when already running.
    pub fn start(&self) -> Result<()> {
        self.engine.start()
    }

    /// Stop the animation, clear the line and restore the cursor.
    pub fn stop(&self) -> Result<()> {
        self.engine.stop()
    }

    /// Finalize with [`DEFAULT_OK_GLYPH`].
    pub fn ok(&self) -> Result<()> {
        self.freeze(DEFAULT_OK_GLYPH)
    }

    /// Finalize with [`DEFAULT_FAIL_GLYPH`].
    pub fn fail(&self) -> Result<()> {
        self.freeze(DEFAULT_FAIL_GLYPH)
    }

    /// Finalize with a custom success glyph. Same as [`Spinner::freeze`].
    pub fn ok_with(&self, glyph: &str) -> Result<()> {
        self.freeze(glyph)
    }

    /// Finalize with a custom failure glyph. Same as [`Spinner::freeze`].
    pub fn fail_with(&self, glyph: &str) -> Result<()> {
        self.freeze(glyph)
    }

    /// Stop and leave `glyph` followed by the current text on screen.
    pub fn freeze(&self, glyph: &str) -> Result<()> {
        self.engine.freeze(glyph)
    }

    /// Replace the text, then freeze.
    pub fn freeze_with(&self, glyph: &str, text: impl Into<String>) -> Result<()> {
        self.set_text(text);
        self.engine.freeze(glyph)
    }

    /// Print a persistent line; the animation continues below it.
    pub fn write(&self, text: &str) -> Result<()> {
        self.engine.write(text)
    }

    pub fn hide(&self) -> Result<()> {
        self.engine.hide()
    }

    pub fn show(&self) -> Result<()> {
        self.engine.show()
    }

    /// Hide until the returned guard is dropped.
    pub fn hidden(&self) -> Result<HiddenGuard> {
        self.hide()?;
        Ok(HiddenGuard {
            spinner: self.clone(),
        })
    }

    /// Start now and stop when the guard goes out of scope, including
    /// during unwinding.
    pub fn enter(&self) -> Result<SpinnerGuard> {
        self.start()?;
        Ok(SpinnerGuard {
            spinner: self.clone(),
            finished: false,
        })
    }

    /// Run `work` with the spinner animating. The closure's return value is
    /// passed through untouched, so its errors reach the caller unchanged.
    pub fn run<T>(&self, work: impl FnOnce() -> T) -> Result<T> {
        let guard = self.enter()?;
        let output = work();
        guard.finish()?;
        Ok(output)
    }

    /// Async counterpart of [`Spinner::run`].
    pub async fn run_async<F: Future>(&self, work: F) -> Result<F::Output> {
        let guard = self.enter()?;
        let output = work.await;
        guard.finish()?;
        Ok(output)
    }

    pub fn state(&self) -> State {
        self.engine.state()
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn is_hidden(&self) -> bool {
        self.engine.is_hidden()
    }

    /// The most recently composed line, including control sequences.
    pub fn last_frame(&self) -> String {
        self.engine.last_frame()
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Effective frames and interval
    pub fn spinner(&self) -> Definition {
        self.engine.definition()
    }

    pub fn set_spinner(&self, definition: SpinnerDefinition) {
        self.engine.set_definition(definition.resolve());
    }

    pub fn text(&self) -> String {
        self.engine.style().text.clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.engine.update_style(|style| style.text = text);
    }

    /// Set text from raw bytes, which must be valid UTF-8.
    pub fn set_text_bytes(&self, bytes: Vec<u8>) -> Result<()> {
        let text = String::from_utf8(bytes)?;
        self.set_text(text);
        Ok(())
    }

    pub fn color(&self) -> Option<Paint<Color>> {
        self.engine.style().color.clone()
    }

    /// Set the frame color by name. `None` or an empty name clears it.
    /// On error the current color is kept.
    pub fn set_color(&self, name: Option<&str>) -> Result<()> {
        let color = parse_named::<Color>(name)?;
        self.engine.update_style(|style| style.color = color);
        Ok(())
    }

    pub fn set_color_fn(&self, f: impl Fn(&str) -> String + Send + Sync + 'static) {
        let f: ColorFn = Arc::new(f);
        self.engine
            .update_style(|style| style.color = Some(Paint::Custom(f)));
    }

    pub fn on_color(&self) -> Option<Paint<Highlight>> {
        self.engine.style().on_color.clone()
    }

    /// Set the frame highlight (`on_<color>` / `on_light_<color>`).
    pub fn set_on_color(&self, name: Option<&str>) -> Result<()> {
        let on_color = parse_named::<Highlight>(name)?;
        self.engine.update_style(|style| style.on_color = on_color);
        Ok(())
    }

    pub fn set_on_color_fn(&self, f: impl Fn(&str) -> String + Send + Sync + 'static) {
        let f: ColorFn = Arc::new(f);
        self.engine
            .update_style(|style| style.on_color = Some(Paint::Custom(f)));
    }

    pub fn attrs(&self) -> BTreeSet<Attribute> {
        self.engine.style().attrs.clone()
    }

    /// Replace the attribute set. Duplicates collapse; any invalid name
    /// rejects the whole update.
    pub fn set_attrs<S: AsRef<str>>(&self, names: &[S]) -> Result<()> {
        let attrs = parse_attrs(names)?;
        self.engine.update_style(|style| style.attrs = attrs);
        Ok(())
    }

    /// Whether the frame renders after the text.
    pub fn right(&self) -> bool {
        self.engine.style().right
    }

    pub fn set_right(&self, right: bool) {
        self.engine.update_style(|style| style.right = right);
    }

    pub fn side(&self) -> Side {
        self.engine.style().side()
    }

    pub fn reverse(&self) -> bool {
        self.engine.style().reverse
    }

    pub fn set_reverse(&self, reverse: bool) {
        self.engine.update_style(|style| style.reverse = reverse);
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Spinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Spinner").field(&self.engine).finish()
    }
}

/// Stops the spinner when dropped. See [`Spinner::enter`].
#[must_use = "the spinner stops as soon as the guard is dropped"]
pub struct SpinnerGuard {
    spinner: Spinner,
    finished: bool,
}

impl SpinnerGuard {
    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    /// Stop now, reporting terminal errors instead of logging them.
    pub fn finish(mut self) -> Result<()> {
        self.finished = true;
        if self.spinner.is_running() {
            self.spinner.stop()?;
        }
        Ok(())
    }
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        if self.finished || !self.spinner.is_running() {
            return;
        }
        if let Err(e) = self.spinner.stop() {
            warn!("failed to stop spinner: {e}");
        }
    }
}

/// Shows the spinner again when dropped. See [`Spinner::hidden`].
#[must_use = "the spinner is shown again as soon as the guard is dropped"]
pub struct HiddenGuard {
    spinner: Spinner,
}

impl Drop for HiddenGuard {
    fn drop(&mut self) {
        if let Err(e) = self.spinner.show() {
            warn!("failed to show spinner: {e}");
        }
    }
}

enum DefinitionArg {
    Given(SpinnerDefinition),
    Named(String),
    Raw(FrameInput, u64),
}

enum PaintArg {
    Name(String),
    Custom(ColorFn),
}

enum TextArg {
    Text(String),
    Bytes(Vec<u8>),
}

/// Collects spinner options; every value is validated in [`build`].
///
/// [`build`]: SpinnerBuilder::build
#[derive(Default)]
pub struct SpinnerBuilder {
    definition: Option<DefinitionArg>,
    text: Option<TextArg>,
    color: Option<PaintArg>,
    on_color: Option<PaintArg>,
    attrs: Vec<String>,
    reverse: bool,
    right: bool,
    sigmap: SigMap,
    sink: Option<Box<dyn TerminalSink>>,
}

impl SpinnerBuilder {
    pub fn spinner(mut self, definition: SpinnerDefinition) -> Self {
        self.definition = Some(DefinitionArg::Given(definition));
        self
    }

    /// Use a catalog entry (see [`catalog::names`]).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.definition = Some(DefinitionArg::Named(name.into()));
        self
    }

    /// Frames plus interval, validated with the both-or-default rule.
    pub fn frames(mut self, frames: impl Into<FrameInput>, interval_ms: u64) -> Self {
        self.definition = Some(DefinitionArg::Raw(frames.into(), interval_ms));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(TextArg::Text(text.into()));
        self
    }

    pub fn text_bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.text = Some(TextArg::Bytes(bytes.into()));
        self
    }

    pub fn color(mut self, name: impl Into<String>) -> Self {
        self.color = Some(PaintArg::Name(name.into()));
        self
    }

    pub fn color_fn(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.color = Some(PaintArg::Custom(Arc::new(f)));
        self
    }

    pub fn on_color(mut self, name: impl Into<String>) -> Self {
        self.on_color = Some(PaintArg::Name(name.into()));
        self
    }

    pub fn on_color_fn(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.on_color = Some(PaintArg::Custom(Arc::new(f)));
        self
    }

    pub fn attrs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attrs = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn right(mut self, right: bool) -> Self {
        self.right = right;
        self
    }

    /// Finalize through `handler` when `signal` arrives while running.
    pub fn signal(mut self, signal: i32, handler: SignalHandler) -> Self {
        self.sigmap.insert(signal, handler);
        self
    }

    pub fn sigmap(mut self, sigmap: SigMap) -> Self {
        self.sigmap = sigmap;
        self
    }

    /// Render somewhere other than stdout.
    pub fn sink(mut self, sink: impl TerminalSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn build(self) -> Result<Spinner> {
        let definition = match self.definition {
            None => Definition::default(),
            Some(DefinitionArg::Given(definition)) => definition.resolve(),
            Some(DefinitionArg::Named(name)) => catalog::get(&name)?,
            Some(DefinitionArg::Raw(frames, interval_ms)) => {
                SpinnerDefinition::new(frames, interval_ms)?.resolve()
            }
        };

        let text = match self.text {
            None => String::new(),
            Some(TextArg::Text(text)) => text,
            Some(TextArg::Bytes(bytes)) => String::from_utf8(bytes)?,
        };

        let color = match self.color {
            None => None,
            Some(PaintArg::Custom(f)) => Some(Paint::Custom(f)),
            Some(PaintArg::Name(name)) => parse_named::<Color>(Some(&name))?,
        };
        let on_color = match self.on_color {
            None => None,
            Some(PaintArg::Custom(f)) => Some(Paint::Custom(f)),
            Some(PaintArg::Name(name)) => parse_named::<Highlight>(Some(&name))?,
        };

        let style = Style {
            text,
            color,
            on_color,
            attrs: parse_attrs(self.attrs.as_slice())?,
            right: self.right,
            reverse: self.reverse,
        };
        let sink = self.sink.unwrap_or_else(|| Box::new(StdoutSink::new()));

        Ok(Spinner::from_engine(Arc::new(SpinnerEngine::new(
            definition,
            style,
            sink,
            self.sigmap,
        ))))
    }
}

fn parse_named<T>(name: Option<&str>) -> Result<Option<Paint<T>>>
where
    T: std::str::FromStr<Err = crate::error::SpinnerError>,
{
    match name {
        None | Some("") => Ok(None),
        Some(name) => Ok(Some(Paint::Named(name.parse()?))),
    }
}

fn parse_attrs<S: AsRef<str>>(names: &[S]) -> Result<BTreeSet<Attribute>> {
    names
        .iter()
        .map(|name| name.as_ref().parse::<Attribute>())
        .collect()
}

#[cfg(test)]
#[path = "spinner_tests.rs"]
mod tests;
