// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Turning issue IDs into tracker URLs.
//!
//! Configured rules are consulted first, in order. When none matches, the
//! link is derived from the remote the current branch tracks, assuming a
//! forge-style `https://<host>/<owner>/<repo>/issues/<id>` layout.

use std::cell::OnceCell;

use serde::Serialize;
use tracing::debug;

use crate::branch::extract_from_branch;
use crate::remote::RemoteUrl;
use crate::repo::RepoInfo;
use crate::rule::{IssueRule, RuleSet};
use crate::scan::{find_issue_spans, IssueSpan};

/// Resolves `issue_id` to a URL.
///
/// Returns `None` when no ID is given, or when no rule matches and the
/// repository offers no usable remote.
pub fn resolve(issue_id: Option<&str>, rules: &[IssueRule], repo: &impl RepoInfo) -> Option<String> {
    resolve_with(issue_id, rules, || current_remote(repo))
}

/// Builds the forge-style link for `issue_id` on `remote`.
///
/// A single leading `#` is dropped from the ID so that `#12` links to
/// `.../issues/12`.
pub fn fallback_url(issue_id: &str, remote: &RemoteUrl) -> Option<String> {
    let (owner, repo) = remote.owner_and_repo()?;
    let number = issue_id.strip_prefix('#').unwrap_or(issue_id);
    Some(format!(
        "https://{}/{}/{}/issues/{}",
        remote.web_host(),
        owner,
        repo,
        number
    ))
}

fn resolve_with(
    issue_id: Option<&str>,
    rules: &[IssueRule],
    remote: impl FnOnce() -> Option<RemoteUrl>,
) -> Option<String> {
    let issue_id = issue_id.filter(|id| !id.is_empty())?;

    if let Some(rule) = rules.iter().find(|rule| rule.matches(issue_id)) {
        debug!(issue_id, pattern = rule.pattern.as_str(), "matched issue rule");
        return Some(rule.expand(issue_id));
    }

    let remote = remote()?;
    let url = fallback_url(issue_id, &remote);
    if url.is_none() {
        debug!(issue_id, remote = %remote, "remote path has no owner/repo");
    }
    url
}

fn current_remote(repo: &impl RepoInfo) -> Option<RemoteUrl> {
    let Some(raw) = repo.remote_url_for_current_branch() else {
        debug!("current branch has no remote");
        return None;
    };
    let remote = RemoteUrl::parse(&raw);
    if remote.is_none() {
        debug!(raw = %raw, "unparseable remote");
    }
    remote
}

/// Outcome of resolving the issue for the current context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The ID that was given or found in the branch name.
    pub id: Option<String>,
    /// The link, when one could be built.
    pub url: Option<String>,
}

/// An issue reference in a document together with its link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedSpan {
    #[serde(flatten)]
    pub span: IssueSpan,
    pub url: Option<String>,
}

/// Resolves issue links for one repository with one rule set.
#[derive(Debug, Clone)]
pub struct Linker<R> {
    rules: RuleSet,
    repo: R,
}

impl<R: RepoInfo> Linker<R> {
    pub fn new(rules: RuleSet, repo: R) -> Self {
        Linker { rules, repo }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Resolves `issue_id` against the rules, then the repository remote.
    pub fn resolve_issue_url(&self, issue_id: Option<&str>) -> Option<String> {
        resolve(issue_id, self.rules.rules(), &self.repo)
    }

    /// The issue ID at an edge of the current branch name, if any.
    pub fn issue_from_branch(&self) -> Option<String> {
        let branch = self.repo.current_branch();
        extract_from_branch(branch.as_deref(), self.rules.patterns())
    }

    /// Resolves `issue_id`, or the branch's issue when no ID is given.
    pub fn resolve_current(&self, issue_id: Option<&str>) -> Resolution {
        let id = match issue_id {
            Some(id) => Some(id.to_string()),
            None => self.issue_from_branch(),
        };
        let url = self.resolve_issue_url(id.as_deref());
        Resolution { id, url }
    }

    /// Finds every issue reference in `text` and resolves each one.
    ///
    /// The remote is looked up at most once per call.
    pub fn scan(&self, text: &str) -> Vec<LinkedSpan> {
        let remote = OnceCell::new();
        find_issue_spans(text, self.rules.patterns())
            .into_iter()
            .map(|span| {
                let url = resolve_with(Some(&span.id), self.rules.rules(), || {
                    remote.get_or_init(|| current_remote(&self.repo)).clone()
                });
                LinkedSpan { span, url }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
