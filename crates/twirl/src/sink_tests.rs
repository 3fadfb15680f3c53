// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn memory_sink_records_writes_and_control_sequences() {
    let recorder = MemorySink::new();
    let mut sink = recorder.clone();

    sink.hide_cursor().unwrap();
    sink.write("\r\x1b[K⠋ Loading").unwrap();
    sink.clear_line().unwrap();
    sink.show_cursor().unwrap();
    sink.flush().unwrap();

    assert_eq!(recorder.writes(), ["\r\x1b[K⠋ Loading"]);
    assert_eq!(
        recorder.output(),
        "\x1b[?25l\r\x1b[K⠋ Loading\r\x1b[K\x1b[?25h"
    );
    assert_eq!(recorder.flushes(), 1);
    assert!(!recorder.cursor_hidden());
}

#[test]
fn memory_sink_tracks_cursor_visibility() {
    let recorder = MemorySink::new();
    let mut sink = recorder.clone();
    sink.hide_cursor().unwrap();
    assert!(recorder.cursor_hidden());
}

#[test]
fn memory_sink_clear_resets_buffers() {
    let recorder = MemorySink::new();
    let mut sink = recorder.clone();
    sink.write("x").unwrap();
    recorder.clear();
    assert!(recorder.writes().is_empty());
    assert!(recorder.output().is_empty());
}
