// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Finding issue references in free text.
//!
//! This is the data side of turning references into clickable regions:
//! it reports where IDs occur, leaving presentation to the caller.

use serde::Serialize;

use crate::rule::IssuePattern;

/// An issue ID found in a document, as a byte range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueSpan {
    pub start: usize,
    pub end: usize,
    pub id: String,
}

impl IssueSpan {
    /// 1-based line and column (in characters) of the span start.
    pub fn line_col(&self, text: &str) -> (usize, usize) {
        let before = &text[..self.start];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let col = before[line_start..].chars().count() + 1;
        (line, col)
    }
}

/// Returns the non-overlapping issue references in `text`, in order.
///
/// Where matches overlap, the earliest start wins. Ties go to the pattern
/// listed first, then to the longer match. Empty matches are ignored.
pub fn find_issue_spans<'p>(
    text: &str,
    patterns: impl IntoIterator<Item = &'p IssuePattern>,
) -> Vec<IssueSpan> {
    let mut candidates: Vec<(usize, usize, usize)> = patterns
        .into_iter()
        .enumerate()
        .flat_map(|(rank, pattern)| {
            pattern
                .find_ranges(text)
                .map(move |(start, end)| (start, rank, end))
                .collect::<Vec<_>>()
        })
        .collect();
    candidates.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)).then(b.2.cmp(&a.2)));

    let mut spans = Vec::new();
    let mut cursor = 0;
    for (start, _, end) in candidates {
        if start < cursor || start == end {
            continue;
        }
        spans.push(IssueSpan {
            start,
            end,
            id: text[start..end].to_string(),
        });
        cursor = end;
    }
    spans
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
