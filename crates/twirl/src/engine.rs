// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spinner animation engine.
//!
//! One worker thread per running engine renders frames at the definition's
//! interval. Display settings live in an immutable [`Style`] snapshot that
//! setters replace as a whole, so the worker always reads a consistent value
//! and picks up changes on the next frame.

use parking_lot::{Mutex, RwLock};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Weak};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, trace, warn};

use crate::decorate::{escape, Decoration, Paint};
use crate::error::Result;
use crate::frames::{Definition, FrameCycle};
use crate::palette::{Attribute, Color, Highlight};
use crate::signals::{self, SigMap, SignalGuard};
use crate::sink::TerminalSink;

/// Which side of the text the frame renders on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Display settings read fresh for every frame.
#[derive(Clone, Debug, Default)]
pub struct Style {
    pub text: String,
    pub color: Option<Paint<Color>>,
    pub on_color: Option<Paint<Highlight>>,
    pub attrs: BTreeSet<Attribute>,
    pub right: bool,
    pub reverse: bool,
}

impl Style {
    pub fn side(&self) -> Side {
        if self.right {
            Side::Right
        } else {
            Side::Left
        }
    }

    pub fn decoration(&self) -> Decoration {
        Decoration::resolve(self.color.as_ref(), self.on_color.as_ref(), &self.attrs)
    }

    fn place(&self, frame: &str) -> String {
        match self.side() {
            Side::Left => format!("{} {}", frame, self.text),
            Side::Right => format!("{} {}", self.text, frame),
        }
    }
}

/// Compose one animated line: clear sequence, then frame and text.
pub fn compose(frame: &str, style: &Style) -> String {
    let frame: Cow<'_, str> = if style.reverse {
        Cow::Owned(frame.chars().rev().collect())
    } else {
        Cow::Borrowed(frame)
    };
    let frame = style.decoration().apply(&frame);
    format!("{}{}", escape::CLEAR_LINE, style.place(&frame))
}

/// Compose the persistent final line for a finalize glyph.
pub fn compose_final(glyph: &str, style: &Style) -> String {
    let glyph = style.decoration().apply(glyph);
    format!("{}\n", style.place(&glyph))
}

/// Engine lifecycle as observed by callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Idle,
    Running,
    Stopped,
}

enum Lifecycle {
    Idle,
    Running(Worker),
    Stopped,
}

struct Worker {
    stop_tx: mpsc::Sender<()>,
    handle: JoinHandle<()>,
}

impl Worker {
    /// Signal the worker and wait for it to exit.
    fn stop(self) {
        let _ = self.stop_tx.send(());
        if self.handle.thread().id() == thread::current().id() {
            // Stopped from inside a render (custom color function); the loop
            // exits on its own once this frame returns.
            return;
        }
        if self.handle.join().is_err() {
            warn!("spinner worker panicked");
        }
    }
}

/// Animation state machine: `Idle -> Running -> Stopped`, restartable.
pub struct SpinnerEngine {
    definition: RwLock<Arc<Definition>>,
    cycle: Mutex<FrameCycle>,
    style: RwLock<Arc<Style>>,
    last_frame: Mutex<String>,
    sink: Mutex<Box<dyn TerminalSink>>,
    hidden: AtomicBool,
    lifecycle: Mutex<Lifecycle>,
    sigmap: SigMap,
    signals: Mutex<Option<SignalGuard>>,
}

impl SpinnerEngine {
    pub fn new(
        definition: Definition,
        style: Style,
        sink: Box<dyn TerminalSink>,
        sigmap: SigMap,
    ) -> Self {
        Self {
            cycle: Mutex::new(definition.cycle()),
            definition: RwLock::new(Arc::new(definition)),
            style: RwLock::new(Arc::new(style)),
            last_frame: Mutex::new(String::new()),
            sink: Mutex::new(sink),
            hidden: AtomicBool::new(false),
            lifecycle: Mutex::new(Lifecycle::Idle),
            sigmap,
            signals: Mutex::new(None),
        }
    }

    pub fn state(&self) -> State {
        match *self.lifecycle.lock() {
            Lifecycle::Idle => State::Idle,
            Lifecycle::Running(_) => State::Running,
            Lifecycle::Stopped => State::Stopped,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == State::Running
    }

    pub fn definition(&self) -> Definition {
        Definition::clone(&self.definition.read())
    }

    /// Swap frames and interval; the cycle restarts at the first frame.
    pub fn set_definition(&self, definition: Definition) {
        *self.cycle.lock() = definition.cycle();
        *self.definition.write() = Arc::new(definition);
    }

    /// Current style snapshot
    pub fn style(&self) -> Arc<Style> {
        Arc::clone(&self.style.read())
    }

    /// Replace the style with a modified copy.
    pub fn update_style(&self, update: impl FnOnce(&mut Style)) {
        let mut current = self.style.write();
        let mut next = Style::clone(&current);
        update(&mut next);
        *current = Arc::new(next);
    }

    /// The most recently composed line
    pub fn last_frame(&self) -> String {
        self.last_frame.lock().clone()
    }

    /// Begin animating. A running engine is left untouched.
    pub fn start(self: &Arc<Self>) -> Result<()> {
        let mut lifecycle = self.lifecycle.lock();
        if matches!(*lifecycle, Lifecycle::Running(_)) {
            debug!("spinner already running");
            return Ok(());
        }

        {
            let mut sink = self.sink.lock();
            sink.hide_cursor()?;
            sink.flush()?;
        }

        let (worker, guard) = match self.spawn_worker() {
            Ok(started) => started,
            Err(e) => {
                if let Err(restore_err) = self.sink.lock().show_cursor() {
                    warn!("failed to restore cursor: {restore_err}");
                }
                return Err(e);
            }
        };
        *self.signals.lock() = guard;
        *lifecycle = Lifecycle::Running(worker);
        debug!("spinner started");
        Ok(())
    }

    /// Register signals and spawn the worker. The guard is dropped, releasing
    /// the signals, if the spawn fails.
    fn spawn_worker(self: &Arc<Self>) -> Result<(Worker, Option<SignalGuard>)> {
        let guard = if self.sigmap.is_empty() {
            None
        } else {
            Some(signals::install(&self.sigmap, Arc::downgrade(self))?)
        };

        let (stop_tx, stop_rx) = mpsc::channel();
        let engine = Arc::downgrade(self);
        let handle = thread::Builder::new()
            .name("twirl-spinner".to_string())
            .spawn(move || spin(engine, stop_rx))?;
        Ok((Worker { stop_tx, handle }, guard))
    }

    /// Stop animating, clear the line and restore the cursor.
    pub fn stop(&self) -> Result<()> {
        self.shutdown(None)
    }

    /// Stop and leave `glyph` plus the current text on screen.
    pub fn freeze(&self, glyph: &str) -> Result<()> {
        let line = compose_final(glyph, &self.style());
        let result = self.shutdown(Some(&line));
        // Set after the worker is joined so no animated frame overwrites it.
        *self.last_frame.lock() = line;
        result
    }

    /// Print a persistent line above the spinner.
    pub fn write(&self, text: &str) -> Result<()> {
        let mut sink = self.sink.lock();
        sink.clear_line()?;
        sink.write(text)?;
        sink.write("\n")?;
        sink.flush()?;
        Ok(())
    }

    /// Suspend rendering without stopping the worker.
    pub fn hide(&self) -> Result<()> {
        let mut sink = self.sink.lock();
        if !self.hidden.swap(true, Ordering::AcqRel) {
            sink.clear_line()?;
            sink.flush()?;
        }
        Ok(())
    }

    pub fn show(&self) -> Result<()> {
        let mut sink = self.sink.lock();
        if self.hidden.swap(false, Ordering::AcqRel) {
            sink.clear_line()?;
            sink.flush()?;
        }
        Ok(())
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden.load(Ordering::Acquire)
    }

    fn shutdown(&self, final_line: Option<&str>) -> Result<()> {
        let worker = {
            let mut lifecycle = self.lifecycle.lock();
            match std::mem::replace(&mut *lifecycle, Lifecycle::Stopped) {
                Lifecycle::Running(worker) => Some(worker),
                Lifecycle::Idle | Lifecycle::Stopped => None,
            }
        };

        drop(self.signals.lock().take());
        if let Some(worker) = worker {
            worker.stop();
            debug!("spinner stopped");
        }

        let mut sink = self.sink.lock();
        sink.clear_line()?;
        if let Some(line) = final_line {
            sink.write(line)?;
        }
        sink.show_cursor()?;
        sink.flush()?;
        Ok(())
    }

    /// Render the next frame unless hidden. Returns the delay until the
    /// following frame.
    fn render_next(&self) -> Duration {
        let interval = self.definition.read().interval();
        if self.is_hidden() {
            return interval;
        }
        let Some(frame) = self.cycle.lock().next() else {
            return interval;
        };
        let line = compose(&frame, &self.style());
        // A custom color function may have stopped the engine.
        if self.state() == State::Stopped {
            return interval;
        }

        // Re-checked under the sink lock so a concurrent hide() wins.
        let mut sink = self.sink.lock();
        if self.is_hidden() {
            return interval;
        }
        if let Err(e) = write_frame(&mut **sink, &line) {
            warn!("failed to write spinner frame: {e}");
        }
        drop(sink);

        trace!(frame = %frame, "rendered frame");
        *self.last_frame.lock() = line;
        interval
    }
}

impl fmt::Debug for SpinnerEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpinnerEngine")
            .field("state", &self.state())
            .field("definition", &self.definition.read())
            .field("style", &self.style.read())
            .field("hidden", &self.is_hidden())
            .finish_non_exhaustive()
    }
}

impl Drop for SpinnerEngine {
    fn drop(&mut self) {
        let lifecycle = std::mem::replace(self.lifecycle.get_mut(), Lifecycle::Stopped);
        if let Lifecycle::Running(worker) = lifecycle {
            worker.stop();
            if let Err(e) = restore(&mut **self.sink.get_mut()) {
                warn!("failed to restore terminal: {e}");
            }
        }
    }
}

fn write_frame(sink: &mut dyn TerminalSink, line: &str) -> io::Result<()> {
    sink.write(line)?;
    sink.flush()
}

fn restore(sink: &mut dyn TerminalSink) -> io::Result<()> {
    sink.clear_line()?;
    sink.show_cursor()?;
    sink.flush()
}

/// Worker loop. Holds only a weak reference so dropping the last spinner
/// handle ends the animation.
fn spin(engine: Weak<SpinnerEngine>, stop_rx: mpsc::Receiver<()>) {
    debug!("spinner worker started");
    loop {
        let interval = match engine.upgrade() {
            Some(engine) => engine.render_next(),
            None => break,
        };
        match stop_rx.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    debug!("spinner worker exited");
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
