// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic, clippy::unwrap_used)]

use super::*;
use proptest::prelude::*;
use yare::parameterized;

#[parameterized(
    lower = { "red", Color::Red },
    capitalized = { "Red", Color::Red },
    mixed = { "grEEn", Color::Green },
    upper = { "CYAN", Color::Cyan },
    white = { "white", Color::White },
)]
fn color_parses_case_insensitively(input: &str, expected: Color) {
    assert_eq!(input.parse::<Color>().unwrap(), expected);
}

#[parameterized(
    black = { "black" },
    black_mixed = { "BlacK" },
    brown = { "brown" },
    orange = { "orange" },
    empty = { "" },
)]
fn color_rejects_unknown_names(input: &str) {
    let err = input.parse::<Color>().unwrap_err();
    match err {
        SpinnerError::InvalidArgument { kind, value, supported } => {
            assert_eq!(kind, "color");
            assert_eq!(value, input);
            assert_eq!(supported, "red, green, yellow, blue, magenta, cyan, white");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn color_display_is_lowercase_name() {
    assert_eq!("MAGENTA".parse::<Color>().unwrap().to_string(), "magenta");
}

#[parameterized(
    on_red = { "on_red", Highlight::On(Color::Red), 41 },
    on_white_upper = { "ON_WHITE", Highlight::On(Color::White), 47 },
    on_light_blue = { "on_light_blue", Highlight::OnLight(Color::Blue), 104 },
    on_light_cyan = { "On_Light_Cyan", Highlight::OnLight(Color::Cyan), 106 },
)]
fn highlight_parses_with_codes(input: &str, expected: Highlight, code: u8) {
    let parsed = input.parse::<Highlight>().unwrap();
    assert_eq!(parsed, expected);
    assert_eq!(parsed.code(), code);
}

#[parameterized(
    bare_color = { "red" },
    on_black = { "on_black" },
    on_light = { "on_light_" },
    prefix_only = { "on_" },
)]
fn highlight_rejects_unknown_names(input: &str) {
    let err = input.parse::<Highlight>().unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("unsupported highlight"), "{msg}");
    assert!(msg.contains("on_red"), "{msg}");
    assert!(msg.contains("on_light_white"), "{msg}");
}

#[test]
fn highlight_names_cover_both_variants() {
    let names = Highlight::names();
    assert_eq!(names.len(), 14);
    assert_eq!(names[0], "on_red");
    assert_eq!(names[7], "on_light_red");
}

#[parameterized(
    bold = { "bold", 1 },
    dark = { "DARK", 2 },
    underline = { "Underline", 4 },
    blink = { "blink", 5 },
    reverse = { "reverse", 7 },
    concealed = { "concealed", 8 },
)]
fn attribute_codes(input: &str, code: u8) {
    assert_eq!(input.parse::<Attribute>().unwrap().code(), code);
}

#[test]
fn attribute_rejects_unknown_name() {
    let err = "italic".parse::<Attribute>().unwrap_err();
    assert!(err.to_string().contains("bold, dark, underline, blink, reverse, concealed"));
}

proptest! {
    #[test]
    fn every_color_round_trips_through_any_case(idx in 0usize..7, upper in proptest::collection::vec(any::<bool>(), 7)) {
        let color = Color::ALL[idx];
        let mangled: String = color
            .name()
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert_eq!(mangled.parse::<Color>().unwrap().to_string(), color.name());
    }

    #[test]
    fn names_outside_palette_are_rejected(name in "[a-z]{1,10}") {
        prop_assume!(!Color::names().contains(&name.as_str()));
        prop_assert!(name.parse::<Color>().is_err());
    }
}
