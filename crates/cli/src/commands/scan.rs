// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lists issue references found in a document.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use il_core::{Linker, RepoInfo};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

use super::open_linker;

#[derive(Serialize)]
struct SpanJson<'a> {
    line: usize,
    column: usize,
    start: usize,
    end: usize,
    id: &'a str,
    url: Option<&'a str>,
}

/// Scan `file`, or standard input when no file is given.
pub fn run(dir: &Path, file: Option<PathBuf>, output: OutputFormat) -> Result<()> {
    let text = match file {
        Some(path) => {
            let path = dir.join(path);
            fs::read_to_string(&path).map_err(|e| {
                Error::Io(std::io::Error::new(
                    e.kind(),
                    format!("{}: {}", path.display(), e),
                ))
            })?
        }
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    let linker = open_linker(dir)?;
    run_impl(&linker, &text, output, &mut std::io::stdout())
}

pub(crate) fn run_impl<R: RepoInfo>(
    linker: &Linker<R>,
    text: &str,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let spans = linker.scan(text);
    tracing::debug!(count = spans.len(), "scanned document");

    match output {
        OutputFormat::Text => {
            for linked in &spans {
                let (line, col) = linked.span.line_col(text);
                writeln!(
                    out,
                    "{}:{}\t{}\t{}",
                    line,
                    col,
                    linked.span.id,
                    linked.url.as_deref().unwrap_or("-")
                )?;
            }
        }
        OutputFormat::Json => {
            let json: Vec<SpanJson> = spans
                .iter()
                .map(|linked| {
                    let (line, column) = linked.span.line_col(text);
                    SpanJson {
                        line,
                        column,
                        start: linked.span.start,
                        end: linked.span.end,
                        id: &linked.span.id,
                        url: linked.url.as_deref(),
                    }
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &json)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
