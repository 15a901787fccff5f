// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use il_core::{Linker, RepoInfo};

use crate::error::{Error, Result};

use super::open_linker;

/// Print the issue ID found at the start or end of the branch name.
pub fn run(dir: &Path) -> Result<()> {
    let linker = open_linker(dir)?;
    run_impl(&linker, &mut std::io::stdout())
}

pub(crate) fn run_impl<R: RepoInfo>(linker: &Linker<R>, out: &mut impl Write) -> Result<()> {
    let id = linker.issue_from_branch().ok_or(Error::NoIssueId)?;
    writeln!(out, "{}", id)?;
    Ok(())
}

#[cfg(test)]
#[path = "branch_tests.rs"]
mod tests;
