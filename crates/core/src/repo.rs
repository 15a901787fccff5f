// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only view of the version-control context.
//!
//! Every accessor answers with an `Option`. A missing tool, a failed
//! command and an unset value all look the same to callers: no result.

/// Repository metadata needed to resolve issue links.
pub trait RepoInfo {
    /// Short name of the checked-out branch, or `None` when detached or
    /// unavailable.
    fn current_branch(&self) -> Option<String>;

    /// A single configuration value, or `None` when unset.
    fn config_value(&self, key: &str) -> Option<String>;

    /// URL of the remote the current branch tracks.
    ///
    /// Follows `branch.<name>.remote` to `remote.<remote>.url`; any missing
    /// link yields `None`.
    fn remote_url_for_current_branch(&self) -> Option<String> {
        let branch = self.current_branch()?;
        let remote = self.config_value(&format!("branch.{}.remote", branch))?;
        self.config_value(&format!("remote.{}.url", remote))
    }
}

impl<T: RepoInfo + ?Sized> RepoInfo for &T {
    fn current_branch(&self) -> Option<String> {
        (**self).current_branch()
    }

    fn config_value(&self, key: &str) -> Option<String> {
        (**self).config_value(key)
    }

    fn remote_url_for_current_branch(&self) -> Option<String> {
        (**self).remote_url_for_current_branch()
    }
}

#[cfg(test)]
#[path = "repo_tests.rs"]
mod tests;
