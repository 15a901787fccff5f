// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue patterns and the (pattern, template) rules built on them.

use std::fmt;

use regex::Regex;

use crate::error::{Error, Result};

/// Placeholder replaced by the issue ID in a link template.
pub const PLACEHOLDER: &str = "%s";

/// Pattern used to recognise issue IDs when no other is configured.
pub const DEFAULT_PATTERN: &str = "#[0-9]+";

/// A compiled issue-ID pattern.
///
/// Besides the plain expression, two edge-anchored variants are compiled
/// up front so that "matches at the start" and "matches at the end" stay
/// separate checks with their own results.
#[derive(Debug, Clone)]
pub struct IssuePattern {
    regex: Regex,
    at_start: Regex,
    at_end: Regex,
}

impl IssuePattern {
    /// Compiles a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if `source` is not a valid regex.
    pub fn new(source: &str) -> Result<Self> {
        let compile = |expr: &str| {
            Regex::new(expr).map_err(|e| Error::InvalidPattern {
                pattern: source.to_string(),
                source: e,
            })
        };
        Ok(IssuePattern {
            regex: compile(source)?,
            at_start: compile(&format!(r"\A(?:{})", source))?,
            at_end: compile(&format!(r"(?:{})\z", source))?,
        })
    }

    /// The pattern source as written in configuration.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns true if the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Returns the match beginning at offset 0, if any.
    pub fn find_at_start<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.at_start.find(text).map(|m| m.as_str())
    }

    /// Returns a match ending exactly at the end of `text`, if any.
    pub fn find_at_end<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.at_end.find(text).map(|m| m.as_str())
    }

    /// Start first, then end.
    pub fn find_at_edge<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.find_at_start(text).or_else(|| self.find_at_end(text))
    }

    /// Iterates over all non-overlapping matches as byte ranges.
    pub(crate) fn find_ranges<'t>(
        &'t self,
        text: &'t str,
    ) -> impl Iterator<Item = (usize, usize)> + 't {
        self.regex.find_iter(text).map(|m| (m.start(), m.end()))
    }
}

impl fmt::Display for IssuePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pattern paired with the URL template used for IDs it matches.
#[derive(Debug, Clone)]
pub struct IssueRule {
    pub pattern: IssuePattern,
    template: String,
}

impl IssueRule {
    /// Builds a rule from its configured pattern and template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] for a bad regex and
    /// [`Error::InvalidTemplate`] unless the template holds exactly one
    /// [`PLACEHOLDER`].
    pub fn new(pattern: &str, template: &str) -> Result<Self> {
        if template.matches(PLACEHOLDER).count() != 1 {
            return Err(Error::InvalidTemplate(template.to_string()));
        }
        Ok(IssueRule {
            pattern: IssuePattern::new(pattern)?,
            template: template.to_string(),
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns true if this rule applies to `issue_id`.
    pub fn matches(&self, issue_id: &str) -> bool {
        self.pattern.is_match(issue_id)
    }

    /// Substitutes `issue_id` verbatim into the template.
    pub fn expand(&self, issue_id: &str) -> String {
        self.template.replacen(PLACEHOLDER, issue_id, 1)
    }
}

/// The ordered rule list together with the default ID pattern.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<IssueRule>,
    default_pattern: IssuePattern,
}

impl RuleSet {
    pub fn new(rules: Vec<IssueRule>, default_pattern: IssuePattern) -> Self {
        RuleSet {
            rules,
            default_pattern,
        }
    }

    /// Builds a rule set that recognises IDs with [`DEFAULT_PATTERN`].
    pub fn with_default_pattern(rules: Vec<IssueRule>) -> Result<Self> {
        Ok(RuleSet::new(rules, IssuePattern::new(DEFAULT_PATTERN)?))
    }

    /// Rules in priority order; the first match wins.
    pub fn rules(&self) -> &[IssueRule] {
        &self.rules
    }

    pub fn default_pattern(&self) -> &IssuePattern {
        &self.default_pattern
    }

    /// Appends a rule after all existing ones.
    pub fn push(&mut self, rule: IssueRule) {
        self.rules.push(rule);
    }

    /// All patterns used to recognise IDs: every rule's pattern in order,
    /// followed by the default pattern.
    pub fn patterns(&self) -> impl Iterator<Item = &IssuePattern> {
        self.rules
            .iter()
            .map(|rule| &rule.pattern)
            .chain(std::iter::once(&self.default_pattern))
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
