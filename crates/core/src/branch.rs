// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Guessing an issue ID from a branch name.

use crate::rule::IssuePattern;

/// Returns the first pattern match found at the start or end of `branch`.
///
/// Patterns are tried in order. Only matches touching an edge of the branch
/// name, or of its last `/` segment, count. So `ABC-42-fix`, `fix/ABC-42`
/// and `feature/ABC-42-fix` yield `ABC-42` while `x-ABC-42-y` yields nothing.
pub fn extract_from_branch<'p>(
    branch: Option<&str>,
    patterns: impl IntoIterator<Item = &'p IssuePattern>,
) -> Option<String> {
    let branch = branch?;
    let last_segment = branch.rsplit('/').next().filter(|s| *s != branch);
    patterns
        .into_iter()
        .find_map(|pattern| {
            pattern
                .find_at_edge(branch)
                .or_else(|| last_segment.and_then(|s| pattern.find_at_edge(s)))
        })
        .map(str::to_string)
}

#[cfg(test)]
#[path = "branch_tests.rs"]
mod tests;
