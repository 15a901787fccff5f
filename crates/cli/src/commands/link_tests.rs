// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::commands::testing::{linker, output, FakeRepo};
use crate::error::Error;

const JIRA: (&str, &str) = ("ABC-[0-9]+", "https://jira.example.com/browse/%s");

#[test]
fn test_link_text_with_rule() {
    let linker = linker(&[JIRA], FakeRepo::default());
    let mut buf = Vec::new();
    run_impl(&linker, Some("ABC-42"), OutputFormat::Text, &mut buf).unwrap();
    assert_eq!(output(buf), "https://jira.example.com/browse/ABC-42\n");
}

#[test]
fn test_link_from_branch_via_remote() {
    let repo = FakeRepo::tracking("fix-#12", "git@github.com:owner/repo.git");
    let linker = linker(&[JIRA], repo);
    let mut buf = Vec::new();
    run_impl(&linker, None, OutputFormat::Text, &mut buf).unwrap();
    assert_eq!(output(buf), "https://github.com/owner/repo/issues/12\n");
}

#[test]
fn test_link_json() {
    let repo = FakeRepo::tracking("main", "https://gitlab.example.com/group/sub/repo.git");
    let linker = linker(&[], repo);
    let mut buf = Vec::new();
    run_impl(&linker, Some("#5"), OutputFormat::Json, &mut buf).unwrap();

    let json: serde_json::Value = serde_json::from_str(&output(buf)).unwrap();
    assert_eq!(json["id"], "#5");
    assert_eq!(json["url"], "https://gitlab.example.com/sub/repo/issues/5");
}

#[test]
fn test_link_unresolvable() {
    let linker = linker(&[JIRA], FakeRepo::on_branch("main"));
    let mut buf = Vec::new();
    let err = run_impl(&linker, Some("#3"), OutputFormat::Text, &mut buf).unwrap_err();
    assert!(matches!(err, Error::Unresolvable { ref id } if id == "#3"));
    assert!(buf.is_empty());
}

#[test]
fn test_link_no_issue_in_branch() {
    let linker = linker(&[JIRA], FakeRepo::on_branch("feature/ABC-1-interior"));
    let mut buf = Vec::new();
    let err = run_impl(&linker, None, OutputFormat::Text, &mut buf).unwrap_err();
    assert!(matches!(err, Error::NoIssueId));
}
