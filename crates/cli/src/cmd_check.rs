// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use termcolor::{ColorChoice, StandardStream};

use testgate::ExitCode;
use testgate::cli::{CheckArgs, OutputFormat};
use testgate::color::resolve_color;
use testgate::config::Settings;
use testgate::report;
use testgate::runner::Runner;

/// Run the check command.
pub fn run(settings: &Settings, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    if args.config_only {
        tracing::info!("configuration is valid");
        return Ok(ExitCode::Success);
    }

    let mut runner = Runner::new(settings);
    if let Some(path) = &args.coverage {
        runner = runner.with_coverage(path);
    }
    let outcome = runner.check()?;

    let choice = match args.output {
        OutputFormat::Text => resolve_color(args.color, args.no_color),
        OutputFormat::Json => ColorChoice::Never,
    };
    let mut stdout = StandardStream::stdout(choice);
    report::write_report(&mut stdout, args.output, &outcome)?;

    Ok(if outcome.passed() {
        ExitCode::Success
    } else {
        ExitCode::ThresholdFailure
    })
}
