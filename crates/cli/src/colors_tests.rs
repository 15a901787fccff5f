// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    two_spaces = { "il link  Resolve", Some(7) },
    many_spaces = { "il link <id>      Resolve an ID", Some(12) },
    single_space = { "il link", None },
    trailing_spaces = { "il link   ", None },
    empty = { "", None },
)]
fn test_find_description_start(line: &str, expected: Option<usize>) {
    assert_eq!(find_description_start(line), expected);
}

#[test]
fn header_wraps_text() {
    let out = header("Examples:");
    assert!(out.starts_with("\x1b[38;5;74m"));
    assert!(out.contains("Examples:"));
    assert!(out.ends_with(RESET));
}

#[test]
fn placeholders_use_context_color() {
    let out = colorize_command("il link <id>");
    assert!(out.contains(&literal("link")));
    assert!(out.contains(&context("<id>")));
}

#[test]
fn examples_plain_without_color() {
    std::env::set_var("NO_COLOR", "1");
    let text = "Examples:\n  il link '#12'    Resolve an issue";
    assert_eq!(examples(text), text);
    std::env::remove_var("NO_COLOR");
}
