// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    default = { &["il", "markup", "#1"], MarkupFormat::Markdown },
    org = { &["il", "markup", "#1", "-f", "org"], MarkupFormat::Org },
    html_long = { &["il", "markup", "#1", "--format", "html"], MarkupFormat::Html },
    md_alias = { &["il", "markup", "#1", "-f", "md"], MarkupFormat::Markdown },
)]
fn test_markup_format(args: &[&str], expected: MarkupFormat) {
    let cli = Cli::try_parse_from(args).unwrap();
    match cli.command {
        Command::Markup { format, .. } => assert_eq!(format, expected),
        _ => unreachable!("expected markup command"),
    }
}

#[test]
fn test_markup_rejects_unknown_format() {
    let err = Cli::try_parse_from(["il", "markup", "#1", "-f", "rst"])
        .err()
        .unwrap();
    assert!(err.to_string().contains("rst"));
}
