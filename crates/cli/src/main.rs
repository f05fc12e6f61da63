// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_check;
mod cmd_discover;
mod cmd_init;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use testgate::cli::{Cli, Command};
use testgate::config::{self, Config, Settings};
use testgate::{Error, ExitCode};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("testgate: {:#}", err);
            exit_code_for(&err).into()
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Command::Init(args) => {
            init_logging(cli.verbose);
            cmd_init::run(cli, args)
        }
        Command::Discover(args) => cmd_discover::run(&load_settings(cli)?, args),
        Command::Check(args) => cmd_check::run(&load_settings(cli)?, args),
    }
}

/// Find, load and resolve configuration, then install logging at the
/// configured verbosity.
fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;

    let config_path = match &cli.config {
        Some(path) => Some(cwd.join(path)),
        None => config::find_config(&cwd),
    };
    let config = match &config_path {
        Some(path) => config::load(path)?,
        None => Config::default(),
    };

    init_logging(cli.verbose || config.verbose);
    match &config_path {
        Some(path) => tracing::debug!("using config {}", path.display()),
        None => tracing::info!("no {} found, using defaults", config::CONFIG_FILE),
    }

    let config_dir = config_path
        .as_deref()
        .and_then(Path::parent)
        .unwrap_or(&cwd);
    let settings = Settings::resolve(&config, config_dir).map_err(Error::from)?;
    tracing::debug!("root dir {}", settings.root_dir.display());
    Ok(settings)
}

/// Logs go to stderr. `TESTGATE_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("TESTGATE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("testgate={level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.downcast_ref::<Error>()
        .map_or(ExitCode::InputError, ExitCode::from)
}
