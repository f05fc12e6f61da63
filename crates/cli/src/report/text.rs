// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io::Write;

use termcolor::WriteColor;

use super::{ReportFormatter, percent};
use crate::color::scheme;
use crate::coverage::CoverageMetric;
use crate::runner::Outcome;
use crate::threshold::{Scope, Verdict};

/// Human-readable report.
///
/// ```text
/// tests: 2 files discovered
/// global: statements 52.00% branches 40.00% functions 75.00% lines 52.00%
/// FAIL src/Helpers.js statements: 99.90% < 100.00%
/// FAIL: 1 of 5 thresholds not met
/// ```
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn write_to(&self, out: &mut dyn WriteColor, outcome: &Outcome) -> anyhow::Result<()> {
        let noun = if outcome.tests.len() == 1 { "file" } else { "files" };
        out.set_color(&scheme::heading())?;
        write!(out, "tests:")?;
        out.reset()?;
        writeln!(out, " {} {} discovered", outcome.tests.len(), noun)?;

        out.set_color(&scheme::heading())?;
        write!(out, "global:")?;
        out.reset()?;
        for metric in CoverageMetric::ALL {
            let value = outcome.aggregate.global.get(&metric).copied().unwrap_or(100.0);
            write!(out, " {} ", metric)?;
            out.set_color(&scheme::value())?;
            write!(out, "{}", percent(value))?;
            out.reset()?;
        }
        writeln!(out)?;

        for verdict in outcome.evaluation.failures() {
            write_failure(out, verdict)?;
        }

        let total = outcome.evaluation.verdicts().len();
        let failed = outcome.evaluation.failures().count();
        if failed == 0 {
            out.set_color(&scheme::pass())?;
            write!(out, "PASS")?;
            out.reset()?;
            writeln!(out, ": {} thresholds met", total)?;
        } else {
            out.set_color(&scheme::fail())?;
            write!(out, "FAIL")?;
            out.reset()?;
            writeln!(out, ": {} of {} thresholds not met", failed, total)?;
        }
        Ok(())
    }
}

fn write_failure(out: &mut dyn WriteColor, verdict: &Verdict) -> std::io::Result<()> {
    out.set_color(&scheme::fail())?;
    write!(out, "FAIL")?;
    out.reset()?;
    write!(out, " ")?;
    match &verdict.scope {
        Scope::Global => write!(out, "global")?,
        Scope::File(path) => {
            out.set_color(&scheme::path())?;
            write!(out, "{}", path)?;
            out.reset()?;
        }
    }
    writeln!(
        out,
        " {}: {} < {}",
        verdict.metric,
        percent(verdict.actual),
        percent(verdict.required)
    )
}
