// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod branch;
pub mod link;
pub mod markup;
pub mod remote;
pub mod rule;
pub mod scan;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::Path;

use il_core::{Linker, RepoInfo};

use crate::config::load_config;
use crate::error::{Error, Result};
use crate::git::GitCli;

/// Builds a linker for the repository and configuration seen from `dir`.
pub fn open_linker(dir: &Path) -> Result<Linker<GitCli>> {
    let (config, path) = load_config(dir)?;
    let origin = path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    let rules = config.rule_set(&origin)?;
    Ok(Linker::new(rules, GitCli::new(dir)))
}

/// Resolves the given ID (or the branch's) into `(id, url)`.
///
/// This is where an unresolvable issue becomes an error.
pub fn require_link<R: RepoInfo>(linker: &Linker<R>, id: Option<&str>) -> Result<(String, String)> {
    let resolution = linker.resolve_current(id);
    let id = resolution.id.ok_or(Error::NoIssueId)?;
    match resolution.url {
        Some(url) => Ok((id, url)),
        None => Err(Error::Unresolvable { id }),
    }
}
