// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule management commands.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::cli::{OutputFormat, RuleCommand};
use crate::config::{config_target, load_config, Config, RuleConfig};
use crate::error::Result;

#[derive(Serialize)]
struct RulesJson<'a> {
    source: Option<String>,
    default_pattern: &'a str,
    rules: &'a [RuleConfig],
}

/// Execute a rule subcommand.
pub fn run(dir: &Path, cmd: RuleCommand) -> Result<()> {
    match cmd {
        RuleCommand::List { output } => {
            let (config, source) = load_config(dir)?;
            // Surface bad rules here rather than at the next `il link`.
            config.rule_set(&source_name(source.as_deref()))?;
            list_impl(&config, source.as_deref(), output, &mut std::io::stdout())
        }
        RuleCommand::Add {
            pattern,
            template,
            global,
        } => {
            let path = config_target(dir, global)?;
            add_impl(&path, &pattern, &template, &mut std::io::stdout())
        }
    }
}

fn source_name(source: Option<&Path>) -> String {
    source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string())
}

pub(crate) fn list_impl(
    config: &Config,
    source: Option<&Path>,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match output {
        OutputFormat::Text => {
            writeln!(out, "source: {}", source_name(source))?;
            writeln!(out, "default pattern: {}", config.default_pattern)?;
            if config.rules.is_empty() {
                writeln!(out, "No rules configured.")?;
            }
            for (i, rule) in config.rules.iter().enumerate() {
                writeln!(out, "{}. {} -> {}", i + 1, rule.pattern, rule.template)?;
            }
        }
        OutputFormat::Json => {
            let json = RulesJson {
                source: source.map(|p| p.display().to_string()),
                default_pattern: &config.default_pattern,
                rules: &config.rules,
            };
            serde_json::to_writer_pretty(&mut *out, &json)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Appends a rule to the configuration file at `path`.
pub(crate) fn add_impl(
    path: &Path,
    pattern: &str,
    template: &str,
    out: &mut impl Write,
) -> Result<()> {
    let mut config = Config::load_or_default(path)?;
    config.add_rule(pattern, template)?;
    config.save(path)?;

    tracing::info!(path = %path.display(), pattern, "added rule");
    writeln!(
        out,
        "Added rule {} to {}",
        config.rules.len(),
        path.display()
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
