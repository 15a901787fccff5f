// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the issuelink library.
///
/// Missing repository context is not an error on its own; it only turns
/// into one here, once a command has nothing left to fall back on.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot build a link for issue '{id}'\n  hint: add a rule with 'il rule add' or set an upstream remote for the branch")]
    Unresolvable { id: String },

    #[error("no issue ID given and none found in the branch name")]
    NoIssueId,

    #[error("no remote configured for the current branch")]
    NoRemote,

    #[error("cannot parse remote '{0}'")]
    UnparseableRemote(String),

    #[error("invalid rule {index} in {path}: {source}")]
    InvalidRule {
        index: usize,
        path: String,
        #[source]
        source: il_core::Error,
    },

    #[error(transparent)]
    Core(#[from] il_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for issuelink operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
