// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue link command.

use std::io::Write;
use std::path::Path;

use il_core::{Linker, RepoInfo};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

use super::{open_linker, require_link};

#[derive(Serialize)]
struct LinkJson<'a> {
    id: &'a str,
    url: &'a str,
}

/// Print the URL for `id`, or for the issue named in the branch.
pub fn run(dir: &Path, id: Option<String>, output: OutputFormat) -> Result<()> {
    let linker = open_linker(dir)?;
    run_impl(&linker, id.as_deref(), output, &mut std::io::stdout())
}

pub(crate) fn run_impl<R: RepoInfo>(
    linker: &Linker<R>,
    id: Option<&str>,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let (id, url) = require_link(linker, id)?;
    tracing::info!(id = %id, url = %url, "resolved issue link");

    match output {
        OutputFormat::Text => writeln!(out, "{}", url)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &LinkJson { id: &id, url: &url })?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "link_tests.rs"]
mod tests;
