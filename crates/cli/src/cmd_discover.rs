// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Discover command implementation.

use std::io::Write;

use testgate::ExitCode;
use testgate::cli::DiscoverArgs;
use testgate::config::Settings;
use testgate::report;
use testgate::runner::Runner;

/// Run the discover command.
pub fn run(settings: &Settings, args: &DiscoverArgs) -> anyhow::Result<ExitCode> {
    let tests = Runner::new(settings).discover()?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    report::write_discovered(&mut handle, args.output, &tests)?;
    handle.flush()?;

    Ok(ExitCode::Success)
}
