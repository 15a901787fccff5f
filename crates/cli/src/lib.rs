// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! issuelink - resolve issue IDs into issue tracker links.
//!
//! This crate provides the `il` command-line tool on top of [`il_core`].
//!
//! # Main Components
//!
//! - [`Config`] - Link rules and the default ID pattern, read from TOML
//! - [`GitCli`] - Repository metadata read through the `git` executable
//! - [`Error`] - Error types for all commands
//!
//! # Resolving a link
//!
//! ```rust,ignore
//! use issuelink::{open_linker, Result};
//!
//! let linker = open_linker(Path::new("."))?;
//! let url = linker.resolve_issue_url(Some("#12"));
//! ```

mod cli;
pub mod colors;
mod commands;
mod env;
mod git;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat, RuleCommand};
pub use commands::open_linker;
pub use config::Config;
pub use error::{Error, Result};
pub use git::GitCli;

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    let dir = match cli.directory {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Command::Link { id, output } => commands::link::run(&dir, id, output),
        Command::Branch => commands::branch::run(&dir),
        Command::Remote { output } => commands::remote::run(&dir, output),
        Command::Scan { file, output } => commands::scan::run(&dir, file, output),
        Command::Markup { id, format } => commands::markup::run(&dir, id, format),
        Command::Rule(cmd) => commands::rule::run(&dir, cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "il", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
