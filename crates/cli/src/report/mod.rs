// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for `check` and `discover`.
//!
//! Formatters only render; they never decide pass or fail.

mod json;
mod text;

use std::io::Write;

use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::runner::Outcome;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for rendering a check outcome.
pub trait ReportFormatter {
    fn write_to(&self, out: &mut dyn WriteColor, outcome: &Outcome) -> anyhow::Result<()>;
}

/// Render `outcome` in the given format.
pub fn write_report(
    out: &mut dyn WriteColor,
    format: OutputFormat,
    outcome: &Outcome,
) -> anyhow::Result<()> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter::now()),
    };
    formatter.write_to(out, outcome)
}

/// Render a discovered test list: one path per line, or a JSON array.
pub fn write_discovered(
    out: &mut dyn Write,
    format: OutputFormat,
    tests: &[String],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for test in tests {
                writeln!(out, "{}", test)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, tests)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Format a percentage for display.
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
