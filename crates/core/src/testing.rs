// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test doubles shared by the unit tests.

use std::cell::Cell;
use std::collections::HashMap;

use crate::repo::RepoInfo;

/// In-memory [`RepoInfo`] with a call counter.
#[derive(Debug, Default)]
pub struct FakeRepo {
    branch: Option<String>,
    config: HashMap<String, String>,
    calls: Cell<usize>,
}

impl FakeRepo {
    pub fn on_branch(branch: &str) -> Self {
        FakeRepo {
            branch: Some(branch.to_string()),
            ..FakeRepo::default()
        }
    }

    pub fn detached() -> Self {
        FakeRepo::default()
    }

    /// A repo on `main` whose upstream is `origin` at `url`.
    pub fn with_origin(url: &str) -> Self {
        FakeRepo::on_branch("main")
            .with_config("branch.main.remote", "origin")
            .with_config("remote.origin.url", url)
    }

    pub fn with_config(mut self, key: &str, value: &str) -> Self {
        self.config.insert(key.to_string(), value.to_string());
        self
    }

    /// Number of lookups made against this repo.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl RepoInfo for FakeRepo {
    fn current_branch(&self) -> Option<String> {
        self.calls.set(self.calls.get() + 1);
        self.branch.clone()
    }

    fn config_value(&self, key: &str) -> Option<String> {
        self.calls.set(self.calls.get() + 1);
        self.config.get(key).cloned()
    }
}
