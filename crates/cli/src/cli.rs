// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::colors;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use il_core::MarkupFormat;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn markup_format(s: &str) -> Result<MarkupFormat, String> {
    s.parse().map_err(|e: il_core::Error| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "il")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve issue IDs into issue tracker links")]
#[command(
    long_about = "Resolve issue IDs into issue tracker links.\n\n\
    IDs are matched against configured (pattern, template) rules. When no rule\n\
    matches, the link is derived from the remote of the current branch."
)]
#[command(after_help = colors::examples("\
Examples:
  il link '#12'                 Link for issue #12
  il link                       Link for the issue named in the branch
  il markup ABC-7 -f org        Org-mode link for ABC-7
  il scan NOTES.md              List issue references in a file"))]
pub struct Cli {
    /// Run as if il was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the tracker URL for an issue
    ///
    /// Without an ID, the issue is taken from the start or end of the
    /// current branch name.
    #[command(after_help = colors::examples("\
Examples:
  il link ABC-42                Resolve through a configured rule
  il link '#12'                 Resolve through the branch's remote
  il link -o json               Resolve the branch's issue as JSON"))]
    Link {
        /// Issue ID (default: taken from the branch name)
        #[arg(value_parser = non_empty_string)]
        id: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Print the issue ID found in the current branch name
    Branch,

    /// Show the remote used for fallback links
    Remote {
        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// List issue references in a document with their links
    #[command(after_help = colors::examples("\
Examples:
  il scan CHANGELOG.md          Scan a file
  git log -1 | il scan          Scan standard input
  il scan notes.txt -o json     Spans with byte offsets as JSON"))]
    Scan {
        /// File to scan (default: standard input)
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Print a document markup link for an issue
    Markup {
        /// Issue ID (default: taken from the branch name)
        #[arg(value_parser = non_empty_string)]
        id: Option<String>,

        /// Markup language: markdown, org, html
        #[arg(long, short, default_value = "markdown", value_parser = markup_format)]
        format: MarkupFormat,
    },

    /// Manage link rules
    #[command(subcommand)]
    Rule(RuleCommand),

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Rule management commands.
#[derive(Subcommand)]
pub enum RuleCommand {
    /// List rules in priority order
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Append a rule after the existing ones
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  il rule add 'ABC-[0-9]+' 'https://jira.example.com/browse/%s'
  il rule add '#[0-9]+' 'https://bugs.example.org/%s' --global")
    )]
    Add {
        /// Regex matched against issue IDs
        #[arg(value_parser = non_empty_string)]
        pattern: String,

        /// URL template; %s is replaced by the issue ID
        #[arg(value_parser = non_empty_string)]
        template: String,

        /// Write to the user configuration instead of the project
        #[arg(long)]
        global: bool,
    },
}

#[cfg(test)]
#[path = "cli_tests/mod.rs"]
mod tests;
