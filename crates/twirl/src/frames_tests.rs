// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic, clippy::unwrap_used)]

use super::*;
use crate::error::SpinnerError;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case::both_unset("", 0)]
#[case::no_frames("", 42)]
#[case::no_interval("-\\|/", 0)]
fn invalid_definitions_use_default(#[case] frames: &str, #[case] interval: u64) {
    let definition = SpinnerDefinition::new(frames, interval).unwrap();
    assert!(definition.is_default());
    assert_eq!(definition.resolve(), Definition::default());
}

#[test]
fn valid_definition_is_kept() {
    let definition = SpinnerDefinition::new("-\\|/", 42).unwrap();
    let resolved = definition.resolve();
    assert_eq!(resolved.frames(), ["-", "\\", "|", "/"]);
    assert_eq!(resolved.interval(), Duration::from_millis(42));
}

#[test]
fn partial_parts_use_default() {
    let frames_only = SpinnerDefinition::from_parts(Some("-\\|/".into()), None).unwrap();
    let interval_only = SpinnerDefinition::from_parts(None, Some(42)).unwrap();
    assert!(frames_only.is_default());
    assert!(interval_only.is_default());
}

#[test]
fn empty_list_uses_default() {
    let definition = SpinnerDefinition::new(Vec::<&str>::new(), 400).unwrap();
    let resolved = definition.resolve();
    assert_eq!(resolved.frames().len(), 10);
    assert_eq!(resolved.interval(), Duration::from_millis(80));
}

#[test]
fn glyph_string_splits_per_character() {
    let resolved = SpinnerDefinition::new("⢄⢂⢁⡁⡈⡐⡠", 80).unwrap().resolve();
    assert_eq!(resolved.frames().len(), 7);
    assert_eq!(resolved.frames()[0], "⢄");
}

#[test]
fn list_elements_are_not_split() {
    let resolved = SpinnerDefinition::new(vec!["[=  ]", "[ = ]", "[  =]"], 100)
        .unwrap()
        .resolve();
    assert_eq!(resolved.frames(), ["[=  ]", "[ = ]", "[  =]"]);
}

#[test]
fn byte_frames_are_decoded() {
    let bytes: &[&[u8]] = &[b"\xf0\x9f\x8c\xb2", b"\xf0\x9f\x8e\x84"];
    let resolved = SpinnerDefinition::new(bytes, 400).unwrap().resolve();
    assert_eq!(resolved.frames(), ["🌲", "🎄"]);
}

#[test]
fn invalid_byte_frames_fail_with_encoding_error() {
    let err = SpinnerDefinition::new(vec![vec![0xff_u8, 0xfe]], 400).unwrap_err();
    assert!(matches!(err, SpinnerError::Encoding(_)));
}

#[test]
fn cycle_wraps_and_restarts() {
    let definition = SpinnerDefinition::new("+x*", 80).unwrap().resolve();
    let frames: Vec<String> = definition.cycle().take(5).collect();
    assert_eq!(frames, ["+", "x", "*", "+", "x"]);

    // A fresh cycle starts over at frame 0.
    assert_eq!(definition.cycle().next().as_deref(), Some("+"));
}

proptest! {
    #[test]
    fn valid_utf8_bytes_decode_like_text(frames in proptest::collection::vec("\\PC{1,4}", 1..8)) {
        let as_bytes: Vec<Vec<u8>> = frames.iter().map(|f| f.as_bytes().to_vec()).collect();
        let from_bytes = SpinnerDefinition::new(as_bytes, 100).unwrap().resolve();
        let from_text = SpinnerDefinition::new(frames.clone(), 100).unwrap().resolve();
        prop_assert_eq!(from_bytes, from_text);
    }

    #[test]
    fn cycle_visits_frames_in_order(len in 1usize..12, steps in 0usize..100) {
        let frames: Vec<String> = (0..len).map(|i| i.to_string()).collect();
        let definition = SpinnerDefinition::new(frames.clone(), 10).unwrap().resolve();
        let produced = definition.cycle().nth(steps).unwrap();
        prop_assert_eq!(produced, frames[steps % len].clone());
    }
}
