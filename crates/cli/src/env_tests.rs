// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::ISSUELINK_CONFIG, "ISSUELINK_CONFIG");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
}

#[test]
fn test_vars_all_lists_every_constant() {
    assert_eq!(
        vars::ALL,
        &[vars::ISSUELINK_CONFIG, vars::NO_COLOR, vars::COLOR]
    );
}

// Both cases live in one test so parallel tests never race on the variable.
#[test]
fn test_config_path() {
    std::env::set_var(vars::ISSUELINK_CONFIG, "/tmp/il.toml");
    assert_eq!(config_path(), Some(PathBuf::from("/tmp/il.toml")));

    std::env::set_var(vars::ISSUELINK_CONFIG, "");
    assert_eq!(config_path(), None);

    std::env::remove_var(vars::ISSUELINK_CONFIG);
    assert_eq!(config_path(), None);
}
