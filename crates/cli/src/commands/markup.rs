// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use il_core::{format_link, Linker, MarkupFormat, RepoInfo};

use crate::error::Result;

use super::{open_linker, require_link};

/// Print a markup link for `id`, or for the issue named in the branch.
pub fn run(dir: &Path, id: Option<String>, format: MarkupFormat) -> Result<()> {
    let linker = open_linker(dir)?;
    run_impl(&linker, id.as_deref(), format, &mut std::io::stdout())
}

pub(crate) fn run_impl<R: RepoInfo>(
    linker: &Linker<R>,
    id: Option<&str>,
    format: MarkupFormat,
    out: &mut impl Write,
) -> Result<()> {
    let (id, url) = require_link(linker, id)?;
    writeln!(out, "{}", format_link(format, &id, &url))?;
    Ok(())
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod tests;
