// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::{linker, output, FakeRepo};
use crate::error::Error;
use yare::parameterized;

#[parameterized(
    markdown = { MarkupFormat::Markdown, "[ABC-1](https://jira/ABC-1)\n" },
    org = { MarkupFormat::Org, "[[https://jira/ABC-1][ABC-1]]\n" },
    html = { MarkupFormat::Html, "<a href=\"https://jira/ABC-1\">ABC-1</a>\n" },
)]
fn test_markup(format: MarkupFormat, expected: &str) {
    let linker = linker(&[("ABC-[0-9]+", "https://jira/%s")], FakeRepo::default());
    let mut buf = Vec::new();
    run_impl(&linker, Some("ABC-1"), format, &mut buf).unwrap();
    assert_eq!(output(buf), expected);
}

#[test]
fn test_markup_from_branch() {
    let repo = FakeRepo::tracking("fix-#21", "git@github.com:owner/repo.git");
    let linker = linker(&[], repo);
    let mut buf = Vec::new();
    run_impl(&linker, None, MarkupFormat::Markdown, &mut buf).unwrap();
    assert_eq!(
        output(buf),
        "[#21](https://github.com/owner/repo/issues/21)\n"
    );
}

#[test]
fn test_markup_unresolvable() {
    let linker = linker(&[], FakeRepo::default());
    let mut buf = Vec::new();
    assert!(matches!(
        run_impl(&linker, Some("#1"), MarkupFormat::Org, &mut buf),
        Err(Error::Unresolvable { .. })
    ));
}
