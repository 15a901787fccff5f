// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue link configuration.
//!
//! Configuration is TOML and includes:
//! - `default_pattern`: regex recognising issue IDs no rule covers (default `#[0-9]+`)
//! - `rules`: ordered `(pattern, template)` pairs; the first matching rule wins
//!
//! The file is looked up in this order:
//! 1. `$ISSUELINK_CONFIG`
//! 2. the nearest `.issuelink.toml` walking up from the working directory
//! 3. `<config dir>/issuelink/config.toml`
//!
//! When none exists the defaults apply.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use il_core::{IssuePattern, IssueRule, RuleSet, DEFAULT_PATTERN};

use crate::env;
use crate::error::{Error, Result};

/// Project-level configuration file name.
pub const CONFIG_FILE_NAME: &str = ".issuelink.toml";
const USER_CONFIG_DIR: &str = "issuelink";
const USER_CONFIG_FILE: &str = "config.toml";

/// Issue link configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Pattern for recognising IDs in branch names and documents.
    #[serde(default = "default_pattern")]
    pub default_pattern: String,
    /// Ordered link rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleConfig>,
}

/// A single `[[rules]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Regex matched against the issue ID.
    pub pattern: String,
    /// Link template; `%s` is replaced by the issue ID.
    pub template: String,
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_pattern: default_pattern(),
            rules: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Loads configuration from `path`, or the defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Config::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Compiles the configuration into a rule set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRule`] naming the first bad rule (1-based), or
    /// the core error for a bad default pattern. `origin` names the source in
    /// messages.
    pub fn rule_set(&self, origin: &str) -> Result<RuleSet> {
        let rules = self
            .rules
            .iter()
            .enumerate()
            .map(|(i, rule)| {
                IssueRule::new(&rule.pattern, &rule.template).map_err(|source| {
                    Error::InvalidRule {
                        index: i + 1,
                        path: origin.to_string(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let default_pattern = IssuePattern::new(&self.default_pattern)?;
        Ok(RuleSet::new(rules, default_pattern))
    }

    /// Appends a rule after validating it.
    pub fn add_rule(&mut self, pattern: &str, template: &str) -> Result<()> {
        IssueRule::new(pattern, template)?;
        self.rules.push(RuleConfig {
            pattern: pattern.to_string(),
            template: template.to_string(),
        });
        Ok(())
    }
}

/// Finds the nearest `.issuelink.toml` walking up from `start`.
pub fn find_project_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Path of the per-user configuration file.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
}

/// Locates the configuration file that applies in `start`, if any.
///
/// An `ISSUELINK_CONFIG` override is returned even when the file is missing,
/// so that it also shadows project and user files.
pub fn locate_config(start: &Path) -> Option<PathBuf> {
    if let Some(path) = env::config_path() {
        return Some(path);
    }
    find_project_config(start).or_else(|| user_config_path().filter(|p| p.is_file()))
}

/// Loads the configuration that applies in `start` and where it came from.
pub fn load_config(start: &Path) -> Result<(Config, Option<PathBuf>)> {
    match locate_config(start) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Ok((Config::load_or_default(&path)?, Some(path)))
        }
        None => Ok((Config::default(), None)),
    }
}

/// The file new rules are written to.
///
/// `global` selects the user file. Otherwise `ISSUELINK_CONFIG`, then the
/// nearest project file, then a new `.issuelink.toml` in `start`.
pub fn config_target(start: &Path, global: bool) -> Result<PathBuf> {
    if global {
        return user_config_path()
            .ok_or_else(|| Error::Config("no user config directory available".to_string()));
    }
    Ok(env::config_path()
        .or_else(|| find_project_config(start))
        .unwrap_or_else(|| start.join(CONFIG_FILE_NAME)))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
