// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Repository metadata read through the `git` command line.
//!
//! Every call is a short-lived `git` process. A missing binary, a non-zero
//! exit and empty output all come back as `None`.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use il_core::RepoInfo;

/// [`RepoInfo`] backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    dir: PathBuf,
}

impl GitCli {
    /// Reads repository metadata as seen from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        GitCli { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Runs git and returns trimmed stdout, or `None` on any failure.
    fn run_git(&self, args: &[&str]) -> Option<String> {
        let output = match Command::new("git")
            .current_dir(&self.dir)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!(?args, error = %e, "failed to run git");
                return None;
            }
        };

        if !output.status.success() {
            tracing::debug!(?args, status = %output.status, "git exited unsuccessfully");
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if stdout.is_empty() {
            tracing::debug!(?args, "git produced no output");
            return None;
        }
        Some(stdout)
    }
}

impl RepoInfo for GitCli {
    fn current_branch(&self) -> Option<String> {
        self.run_git(&["symbolic-ref", "--short", "-q", "HEAD"])
    }

    fn config_value(&self, key: &str) -> Option<String> {
        self.run_git(&["config", "--get", key])
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
