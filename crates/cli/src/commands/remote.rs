// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shows the remote behind fallback links.

use std::io::Write;
use std::path::Path;

use il_core::{Linker, RemoteUrl, RepoInfo};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

use super::open_linker;

#[derive(Serialize)]
struct RemoteJson<'a> {
    url: &'a str,
    scheme: &'a str,
    host: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,
    path: &'a str,
    owner: Option<&'a str>,
    repo: Option<&'a str>,
}

pub fn run(dir: &Path, output: OutputFormat) -> Result<()> {
    let linker = open_linker(dir)?;
    run_impl(&linker, output, &mut std::io::stdout())
}

pub(crate) fn run_impl<R: RepoInfo>(
    linker: &Linker<R>,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let raw = linker
        .repo()
        .remote_url_for_current_branch()
        .ok_or(Error::NoRemote)?;
    let remote = RemoteUrl::parse(&raw).ok_or_else(|| Error::UnparseableRemote(raw.clone()))?;
    let (owner, repo) = match remote.owner_and_repo() {
        Some((owner, repo)) => (Some(owner), Some(repo)),
        None => (None, None),
    };

    match output {
        OutputFormat::Text => {
            writeln!(out, "remote:  {}", raw)?;
            writeln!(out, "host:    {}", remote.host_display())?;
            writeln!(out, "path:    {}", remote.path)?;
            match (owner, repo) {
                (Some(owner), Some(repo)) => writeln!(out, "project: {}/{}", owner, repo)?,
                _ => writeln!(out, "project: -")?,
            }
        }
        OutputFormat::Json => {
            let json = RemoteJson {
                url: &raw,
                scheme: &remote.scheme,
                host: &remote.host,
                port: remote.port,
                path: &remote.path,
                owner,
                repo,
            };
            serde_json::to_writer_pretty(&mut *out, &json)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;
