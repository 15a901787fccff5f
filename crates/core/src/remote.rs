// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing of version-control remote addresses.
//!
//! Remotes come in two shapes:
//! - URI style: `https://gitlab.example.com/group/repo.git`,
//!   `ssh://git@host:2222/owner/repo.git`
//! - SCP style: `git@github.com:owner/repo.git` (no scheme, `:` separates
//!   host from path)
//!
//! Both are normalised into a URI and handed to the `url` crate.

use std::borrow::Cow;
use std::fmt;

use url::Url;

/// Scheme prepended to scheme-less remotes so they parse as URLs.
const SYNTHETIC_SCHEME: &str = "ssh";

/// A remote address decomposed into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrl {
    /// URI scheme; `ssh` for SCP-style input.
    pub scheme: String,
    /// Host name without port.
    pub host: String,
    /// Explicit port, if the remote names one.
    pub port: Option<u16>,
    /// Path component, always starting with `/`.
    pub path: String,
}

impl RemoteUrl {
    /// Parses a raw remote string.
    ///
    /// Returns `None` for input that cannot be read as a remote with a host.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let (scheme, rest, scp_style) = match split_scheme(raw) {
            Some((scheme, rest)) => (scheme, rest, false),
            None if is_local_path(raw) => return None,
            None => (SYNTHETIC_SCHEME, raw, true),
        };
        let normalized = format!("{}://{}", scheme, unfold_authority(rest, scp_style));

        let url = Url::parse(&normalized).ok()?;
        let host = url
            .host_str()
            .filter(|h| !h.is_empty() && *h != "." && *h != "..")?;

        Some(RemoteUrl {
            scheme: url.scheme().to_string(),
            host: host.to_string(),
            port: url.port(),
            path: url.path().to_string(),
        })
    }

    /// Host with the port folded in, e.g. `git.example.com:2222`.
    pub fn host_display(&self) -> Cow<'_, str> {
        match self.port {
            Some(port) => Cow::Owned(format!("{}:{}", self.host, port)),
            None => Cow::Borrowed(&self.host),
        }
    }

    /// Host to use in web links.
    ///
    /// A port only carries over from `http`/`https` remotes; an SSH port says
    /// nothing about where the web interface lives.
    pub fn web_host(&self) -> Cow<'_, str> {
        match self.scheme.as_str() {
            "http" | "https" => self.host_display(),
            _ => Cow::Borrowed(&self.host),
        }
    }

    /// The last two path segments as `(owner, repository)`, with any
    /// trailing `.git` removed.
    pub fn owner_and_repo(&self) -> Option<(&str, &str)> {
        let path = self.path.trim_end_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);
        let mut segments = path.rsplit('/').filter(|s| !s.is_empty());
        let repo = segments.next()?;
        let owner = segments.next()?;
        Some((owner, repo))
    }
}

impl fmt::Display for RemoteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host_display(), self.path)
    }
}

/// Splits `scheme://rest` when the prefix is a well-formed scheme.
fn split_scheme(raw: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = raw.split_once("://")?;
    let mut chars = scheme.chars();
    let well_formed = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    well_formed.then_some((scheme, rest))
}

/// Returns true for scheme-less input git reads as a filesystem path.
///
/// SCP syntax needs a `:` before the first `/`; a drive letter such as
/// `C:/` or `C:\` does not count.
fn is_local_path(raw: &str) -> bool {
    let authority = raw.split('/').next().unwrap_or(raw);
    if !authority.contains(':') {
        return true;
    }
    let bytes = raw.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && matches!(bytes[2], b'/' | b'\\')
}

/// Moves an SCP-style `host:path` out of the authority.
///
/// For SCP-style input everything after the first `:` is path. With an
/// explicit scheme, `host:<digits>` stays a port and anything else after the
/// `:` is treated as the start of the path.
fn unfold_authority(rest: &str, scp_style: bool) -> Cow<'_, str> {
    let (authority, path) = match rest.find('/') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };
    let (userinfo, host_port) = match authority.rfind('@') {
        Some(i) => authority.split_at(i + 1),
        None => ("", authority),
    };
    // IPv6 literals carry their own colons.
    if host_port.starts_with('[') {
        return Cow::Borrowed(rest);
    }
    let Some((host, tail)) = host_port.split_once(':') else {
        return Cow::Borrowed(rest);
    };

    let is_port = !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit());
    if is_port && !scp_style {
        return Cow::Borrowed(rest);
    }

    let moved = format!("{}{}", tail, path);
    Cow::Owned(format!(
        "{}{}/{}",
        userinfo,
        host,
        moved.trim_start_matches('/')
    ))
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;
