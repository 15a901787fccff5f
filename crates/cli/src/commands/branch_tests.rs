// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::{linker, output, FakeRepo};
use yare::parameterized;

#[parameterized(
    leading = { "ABC-42-fix-thing", "ABC-42" },
    trailing = { "fix/ABC-42", "ABC-42" },
    default_pattern = { "hotfix-#7", "#7" },
)]
fn test_branch_prints_issue(branch: &str, expected: &str) {
    let linker = linker(&[("ABC-[0-9]+", "https://j/%s")], FakeRepo::on_branch(branch));
    let mut buf = Vec::new();
    run_impl(&linker, &mut buf).unwrap();
    assert_eq!(output(buf).trim(), expected);
}

#[test]
fn test_branch_without_issue() {
    let linker = linker(&[("ABC-[0-9]+", "https://j/%s")], FakeRepo::on_branch("x-ABC-42-y"));
    let mut buf = Vec::new();
    assert!(matches!(run_impl(&linker, &mut buf), Err(Error::NoIssueId)));
}

#[test]
fn test_detached_head() {
    let linker = linker(&[], FakeRepo::default());
    let mut buf = Vec::new();
    assert!(run_impl(&linker, &mut buf).is_err());
}
