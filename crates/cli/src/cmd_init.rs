// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Init command implementation.

use anyhow::Context;

use testgate::cli::{Cli, InitArgs};
use testgate::config::CONFIG_FILE;
use testgate::error::ConfigError;
use testgate::{Error, ExitCode};

const TEMPLATE: &str = r#"version = 1

# Directories searched for tests, relative to this file.
roots = ["<rootDir>"]

# Glob(s) a test file must match.
test_pattern = ["**/__tests__/**/*.{js,jsx,ts,tsx}", "**/*.{spec,test}.{js,jsx,ts,tsx}"]

# Paths excluded from discovery. `dir/` excludes everything below dir.
ignore_patterns = ["**/node_modules/**"]

# Files whose coverage counts toward thresholds.
coverage_globs = ["**"]
coverage_directory = "coverage"

[thresholds.global]
# statements = 80
# branches = 80
# functions = 80
# lines = 80

# [thresholds.overrides."src/critical.js"]
# statements = 100
"#;

/// Run the init command.
pub fn run(cli: &Cli, args: &InitArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let path = match &cli.config {
        Some(path) => cwd.join(path),
        None => cwd.join(CONFIG_FILE),
    };

    if path.exists() && !args.force {
        return Err(Error::from(ConfigError::Exists(path)).into());
    }

    std::fs::write(&path, TEMPLATE).map_err(|e| Error::io(&path, e))?;
    println!("Created {}", path.display());
    Ok(ExitCode::Success)
}
