// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! il-core: issue link resolution.
//!
//! Turns issue IDs such as `#123` or `ABC-42` into tracker URLs using an
//! ordered list of (pattern, template) rules, falling back to a link derived
//! from the repository remote. Repository access goes through the
//! [`RepoInfo`] trait so the core stays free of process and file I/O.

pub mod branch;
pub mod error;
pub mod markup;
pub mod remote;
pub mod repo;
pub mod resolve;
pub mod rule;
pub mod scan;

#[cfg(test)]
mod testing;

pub use branch::extract_from_branch;
pub use error::{Error, Result};
pub use markup::{format_link, MarkupFormat};
pub use remote::RemoteUrl;
pub use repo::RepoInfo;
pub use resolve::{fallback_url, resolve, LinkedSpan, Linker, Resolution};
pub use rule::{IssuePattern, IssueRule, RuleSet, DEFAULT_PATTERN, PLACEHOLDER};
pub use scan::{find_issue_spans, IssueSpan};
