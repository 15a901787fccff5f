// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The `il` binary, isolated from any user configuration.
///
/// `ISSUELINK_CONFIG` points at a file that does not exist yet, so defaults
/// apply until a test writes rules there.
pub fn il(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("il");
    cmd.current_dir(temp.path())
        .env("ISSUELINK_CONFIG", config_path(temp))
        .env_remove("RUST_LOG");
    cmd
}

pub fn config_path(temp: &TempDir) -> std::path::PathBuf {
    temp.path().join("il-config.toml")
}

pub fn git(dir: &Path, args: &[&str]) {
    let status = StdCommand::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
        .status;
    assert!(status.success(), "git {:?} failed", args);
}

/// A git repository checked out on `branch` (unborn, no commits).
pub fn repo_on_branch(branch: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    git(temp.path(), &["init", "-q"]);
    git(
        temp.path(),
        &["symbolic-ref", "HEAD", &format!("refs/heads/{}", branch)],
    );
    temp
}

/// A repository on `branch` tracking `origin` at `url`.
pub fn repo_tracking(branch: &str, url: &str) -> TempDir {
    let temp = repo_on_branch(branch);
    git(temp.path(), &["remote", "add", "origin", url]);
    git(
        temp.path(),
        &["config", &format!("branch.{}.remote", branch), "origin"],
    );
    temp
}

/// Writes a rules file at the isolated config path.
pub fn write_rules(temp: &TempDir, rules: &[(&str, &str)]) {
    let mut content = String::new();
    for (pattern, template) in rules {
        content.push_str(&format!(
            "[[rules]]\npattern = '{}'\ntemplate = '{}'\n\n",
            pattern, template
        ));
    }
    std::fs::write(config_path(temp), content).unwrap();
}
