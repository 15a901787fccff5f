// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt::Write as _;

/// Environment variables read by `il`, with the doc line for each constant.
const VARS: &[(&str, &str)] = &[
    ("ISSUELINK_CONFIG", "Path of the configuration file to use."),
    ("NO_COLOR", "Set to `1` to disable colored help."),
    ("COLOR", "Set to `1` to force colored help."),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    let mut code = String::new();
    for (name, doc) in VARS {
        writeln!(code, "/// {doc}")?;
        writeln!(code, "pub const {name}: &str = {name:?};")?;
    }
    writeln!(code, "/// Every variable above, in declaration order.")?;
    let names: Vec<&str> = VARS.iter().map(|(name, _)| *name).collect();
    writeln!(code, "pub const ALL: &[&str] = &[{}];", names.join(", "))?;

    let out_dir = std::env::var("OUT_DIR")?;
    std::fs::write(std::path::Path::new(&out_dir).join("env_vars.rs"), code)?;
    Ok(())
}
