// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Document markup for resolved issue links.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Markup language used when writing a link into a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkupFormat {
    #[default]
    Markdown,
    Org,
    Html,
}

impl MarkupFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkupFormat::Markdown => "markdown",
            MarkupFormat::Org => "org",
            MarkupFormat::Html => "html",
        }
    }
}

impl fmt::Display for MarkupFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MarkupFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(MarkupFormat::Markdown),
            "org" => Ok(MarkupFormat::Org),
            "html" => Ok(MarkupFormat::Html),
            _ => Err(Error::InvalidMarkupFormat(s.to_string())),
        }
    }
}

/// Renders a link labelled with the issue ID.
pub fn format_link(format: MarkupFormat, issue_id: &str, url: &str) -> String {
    match format {
        MarkupFormat::Markdown => format!("[{}]({})", issue_id, url),
        MarkupFormat::Org => format!("[[{}][{}]]", url, issue_id),
        MarkupFormat::Html => format!(
            "<a href=\"{}\">{}</a>",
            escape_html(url),
            escape_html(issue_id)
        ),
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod tests;
