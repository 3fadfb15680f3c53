// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic, clippy::unwrap_used)]

use super::*;
use crate::error::SpinnerError;
use crate::sink::MemorySink;
use std::time::Duration;
use yare::parameterized;

fn quiet() -> (Spinner, MemorySink) {
    let recorder = MemorySink::new();
    let spinner = Spinner::builder().sink(recorder.clone()).build().unwrap();
    (spinner, recorder)
}

// =========================================================================
// Builder
// =========================================================================

#[test]
fn builder_defaults() {
    let (spinner, _recorder) = quiet();
    assert_eq!(spinner.spinner(), Definition::default());
    assert_eq!(spinner.text(), "");
    assert_eq!(spinner.color(), None);
    assert_eq!(spinner.on_color(), None);
    assert!(spinner.attrs().is_empty());
    assert!(!spinner.reverse());
    assert!(!spinner.right());
    assert_eq!(spinner.side(), Side::Left);
    assert_eq!(spinner.state(), State::Idle);
}

#[test]
fn builder_accepts_frames_and_interval() {
    let spinner = Spinner::builder()
        .frames(vec!["ab", "cd"], 120)
        .sink(MemorySink::new())
        .build()
        .unwrap();
    let definition = spinner.spinner();
    assert_eq!(definition.frames(), ["ab", "cd"]);
    assert_eq!(definition.interval(), Duration::from_millis(120));
}

#[test]
fn builder_zero_interval_uses_default() {
    let spinner = Spinner::builder()
        .frames("+x*", 0)
        .sink(MemorySink::new())
        .build()
        .unwrap();
    assert_eq!(spinner.spinner(), Definition::default());
}

#[test]
fn builder_named_spinner() {
    let spinner = Spinner::builder()
        .named("moon")
        .sink(MemorySink::new())
        .build()
        .unwrap();
    assert_eq!(spinner.spinner(), catalog::get("moon").unwrap());
}

#[test]
fn builder_rejects_invalid_byte_frames() {
    let frames: Vec<Vec<u8>> = vec![vec![0xff, 0xfe]];
    let err = Spinner::builder()
        .frames(frames, 80)
        .sink(MemorySink::new())
        .build()
        .unwrap_err();
    assert!(matches!(err, SpinnerError::Encoding(_)));
}

#[test]
fn builder_decodes_text_bytes() {
    let spinner = Spinner::builder()
        .text_bytes("Загрузка".as_bytes())
        .sink(MemorySink::new())
        .build()
        .unwrap();
    assert_eq!(spinner.text(), "Загрузка");
}

#[parameterized(
    color = { Spinner::builder().color("mauve"), "color" },
    on_color = { Spinner::builder().on_color("red"), "highlight" },
    attr = { Spinner::builder().attrs(["bold", "sparkly"]), "attribute" },
)]
fn builder_rejects_bad_names(builder: SpinnerBuilder, expected_kind: &str) {
    match builder.sink(MemorySink::new()).build() {
        Err(SpinnerError::InvalidArgument { kind, .. }) => assert_eq!(kind, expected_kind),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn builder_collapses_duplicate_attrs() {
    let spinner = Spinner::builder()
        .attrs(["bold", "BOLD", "underline"])
        .sink(MemorySink::new())
        .build()
        .unwrap();
    assert_eq!(
        spinner.attrs().into_iter().collect::<Vec<_>>(),
        [Attribute::Bold, Attribute::Underline]
    );
}

// =========================================================================
// Setters
// =========================================================================

#[test]
fn set_color_accepts_any_case_and_clears() {
    let (spinner, _recorder) = quiet();
    spinner.set_color(Some("Magenta")).unwrap();
    assert_eq!(spinner.color().and_then(|c| c.name()).as_deref(), Some("magenta"));

    spinner.set_color(Some("")).unwrap();
    assert_eq!(spinner.color(), None);

    spinner.set_color(Some("cyan")).unwrap();
    spinner.set_color(None).unwrap();
    assert_eq!(spinner.color(), None);
}

#[test]
fn failed_setter_keeps_previous_value() {
    let (spinner, _recorder) = quiet();
    spinner.set_color(Some("blue")).unwrap();
    assert!(spinner.set_color(Some("black")).is_err());
    assert_eq!(spinner.color(), Some(Paint::Named(Color::Blue)));

    spinner.set_attrs(&["bold"]).unwrap();
    assert!(spinner.set_attrs(&["dark", "glow"]).is_err());
    assert_eq!(spinner.attrs().into_iter().collect::<Vec<_>>(), [Attribute::Bold]);
}

#[test]
fn set_on_color_requires_prefix() {
    let (spinner, _recorder) = quiet();
    spinner.set_on_color(Some("on_light_cyan")).unwrap();
    assert_eq!(
        spinner.on_color(),
        Some(Paint::Named(Highlight::OnLight(Color::Cyan)))
    );
    assert!(spinner.set_on_color(Some("cyan")).is_err());
}

#[test]
fn custom_color_fn_reported_without_name() {
    let (spinner, _recorder) = quiet();
    spinner.set_color_fn(|frame| format!("*{frame}*"));
    assert!(matches!(spinner.color(), Some(Paint::Custom(_))));
    assert_eq!(spinner.color().and_then(|c| c.name()), None);
}

#[test]
fn set_text_bytes_rejects_invalid_utf8() {
    let (spinner, _recorder) = quiet();
    spinner.set_text("kept");
    let err = spinner.set_text_bytes(vec![0xc3, 0x28]).unwrap_err();
    assert!(matches!(err, SpinnerError::Encoding(_)));
    assert_eq!(spinner.text(), "kept");
}

#[test]
fn set_spinner_default_sentinel() {
    let spinner = Spinner::builder()
        .named("line")
        .sink(MemorySink::new())
        .build()
        .unwrap();
    spinner.set_spinner(SpinnerDefinition::UseDefault);
    assert_eq!(spinner.spinner(), Definition::default());
}

#[test]
fn side_tracks_right() {
    let (spinner, _recorder) = quiet();
    spinner.set_right(true);
    assert_eq!(spinner.side(), Side::Right);
    spinner.set_reverse(true);
    assert!(spinner.reverse());
}

// =========================================================================
// Finalizers
// =========================================================================

#[test]
fn ok_and_fail_use_default_glyphs() {
    let (spinner, recorder) = quiet();
    spinner.set_text("Done");
    spinner.ok().unwrap();
    assert_eq!(spinner.last_frame(), "OK Done\n");

    spinner.fail().unwrap();
    assert_eq!(spinner.last_frame(), "FAIL Done\n");
    assert!(recorder.output().contains("OK Done\n"));
}

#[test]
fn custom_glyphs_are_decorated() {
    let (spinner, _recorder) = quiet();
    spinner.set_text("Saved");
    spinner.set_color(Some("green")).unwrap();
    spinner.ok_with("✔").unwrap();
    assert_eq!(spinner.last_frame(), "\x1b[32m✔\x1b[0m Saved\n");
}

#[parameterized(
    ok_with = { Spinner::ok_with },
    fail_with = { Spinner::fail_with },
)]
fn custom_finalizers_match_freeze(finalize: fn(&Spinner, &str) -> Result<()>) {
    let (spinner, recorder) = quiet();
    spinner.set_text("Step");
    finalize(&spinner, "*").unwrap();

    let (frozen, frozen_recorder) = quiet();
    frozen.set_text("Step");
    frozen.freeze("*").unwrap();

    assert_eq!(spinner.last_frame(), frozen.last_frame());
    assert_eq!(recorder.output(), frozen_recorder.output());
}

#[test]
fn freeze_with_replaces_text() {
    let (spinner, _recorder) = quiet();
    spinner.set_text("Working");
    spinner.freeze_with("★", "Finished").unwrap();
    assert_eq!(spinner.text(), "Finished");
    assert_eq!(spinner.last_frame(), "★ Finished\n");
}

#[test]
fn right_side_final_line() {
    let (spinner, _recorder) = quiet();
    spinner.set_text("Done");
    spinner.set_right(true);
    spinner.fail_with("✘").unwrap();
    assert_eq!(spinner.last_frame(), "Done ✘\n");
}

// =========================================================================
// Scoped usage
// =========================================================================

#[test]
fn run_passes_result_through() {
    let (spinner, recorder) = quiet();
    let result: std::result::Result<u32, String> = spinner.run(|| Err("boom".to_string())).unwrap();
    assert_eq!(result, Err("boom".to_string()));
    assert_eq!(spinner.state(), State::Stopped);
    assert!(!recorder.cursor_hidden());
}

#[test]
fn guard_stops_on_drop() {
    let (spinner, recorder) = quiet();
    {
        let guard = spinner.enter().unwrap();
        assert!(guard.spinner().is_running());
        assert!(recorder.cursor_hidden());
    }
    assert_eq!(spinner.state(), State::Stopped);
    assert!(!recorder.cursor_hidden());
}

#[test]
fn guard_after_finalizer_does_not_clear_final_line() {
    let (spinner, recorder) = quiet();
    spinner.set_text("Done");
    {
        let guard = spinner.enter().unwrap();
        guard.spinner().ok().unwrap();
    }
    assert!(recorder.output().ends_with("OK Done\n\x1b[?25h"));
}

#[test]
fn hidden_guard_shows_on_drop() {
    let (spinner, _recorder) = quiet();
    {
        let _hidden = spinner.hidden().unwrap();
        assert!(spinner.is_hidden());
    }
    assert!(!spinner.is_hidden());
}

#[test]
fn clones_share_state() {
    let (spinner, _recorder) = quiet();
    let other = spinner.clone();
    other.set_text("shared");
    assert_eq!(spinner.text(), "shared");
}
