// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for il-core operations.

use thiserror::Error;

/// All possible errors that can occur while building rules or reading options.
///
/// Resolution itself never fails: an issue that cannot be linked is an
/// absent value, not an error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid issue pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid link template '{0}'\n  hint: a template must contain '%s' exactly once")]
    InvalidTemplate(String),

    #[error("invalid markup format: '{0}'\n  hint: valid formats are: markdown, org, html")]
    InvalidMarkupFormat(String),
}

/// A specialized Result type for il-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
