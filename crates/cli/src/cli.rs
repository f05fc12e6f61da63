// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;

/// Test discovery and coverage threshold enforcement for CI
#[derive(Parser)]
#[command(name = "testgate")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to testgate.toml (skips the upward search)
    #[arg(short = 'C', long = "config", global = true, env = "TESTGATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List test files matched by the configured roots and patterns
    Discover(DiscoverArgs),
    /// Discover tests and enforce coverage thresholds
    Check(CheckArgs),
    /// Write a starter testgate.toml
    Init(InitArgs),
}

#[derive(clap::Args)]
pub struct DiscoverArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Coverage summary to read (default: <coverage_directory>/coverage-summary.json)
    #[arg(long, value_name = "PATH")]
    pub coverage: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Validate testgate.toml and exit without discovering tests
    #[arg(long = "config-only")]
    pub config_only: bool,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite an existing testgate.toml
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
