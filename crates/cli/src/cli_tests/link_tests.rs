// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

#[test]
fn test_link_with_id() {
    let cli = Cli::try_parse_from(["il", "link", "#12"]).unwrap();
    match cli.command {
        Command::Link { id, output } => {
            assert_eq!(id.as_deref(), Some("#12"));
            assert_eq!(output, OutputFormat::Text);
        }
        _ => unreachable!("expected link command"),
    }
}

#[test]
fn test_link_without_id() {
    let cli = Cli::try_parse_from(["il", "link", "-o", "json"]).unwrap();
    match cli.command {
        Command::Link { id, output } => {
            assert!(id.is_none());
            assert_eq!(output, OutputFormat::Json);
        }
        _ => unreachable!("expected link command"),
    }
}

#[test]
fn test_link_rejects_blank_id() {
    assert!(Cli::try_parse_from(["il", "link", "  "]).is_err());
}

#[test]
fn test_remote_output_flag() {
    let cli = Cli::try_parse_from(["il", "remote", "--output", "json"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Remote {
            output: OutputFormat::Json
        }
    ));
}

#[test]
fn test_link_help_quotes_hash_ids() {
    use clap::CommandFactory;

    let mut cmd = Cli::command();
    let top = cmd.render_long_help().to_string();
    assert!(top.contains("'#12'"), "top-level help: {top}");

    let link = cmd
        .find_subcommand_mut("link")
        .expect("link subcommand")
        .render_long_help()
        .to_string();
    assert!(link.contains("'#12'"), "link help: {link}");
}
