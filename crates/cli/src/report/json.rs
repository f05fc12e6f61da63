// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;
use termcolor::WriteColor;

use super::ReportFormatter;
use crate::coverage::Percentages;
use crate::runner::Outcome;
use crate::threshold::Verdict;

/// JSON format report formatter.
pub struct JsonFormatter {
    generated: DateTime<Utc>,
}

impl JsonFormatter {
    pub fn new(generated: DateTime<Utc>) -> Self {
        Self { generated }
    }

    pub fn now() -> Self {
        Self::new(Utc::now())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated: String,
    passed: bool,
    tests: &'a [String],
    global: &'a Percentages,
    files: &'a BTreeMap<String, Percentages>,
    verdicts: &'a [Verdict],
    unmatched_overrides: &'a [String],
}

impl ReportFormatter for JsonFormatter {
    fn write_to(&self, out: &mut dyn WriteColor, outcome: &Outcome) -> anyhow::Result<()> {
        let report = JsonReport {
            generated: self.generated.to_rfc3339(),
            passed: outcome.passed(),
            tests: &outcome.tests,
            global: &outcome.aggregate.global,
            files: &outcome.aggregate.per_file,
            verdicts: outcome.evaluation.verdicts(),
            unmatched_overrides: outcome.evaluation.unmatched_overrides(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        Ok(())
    }
}
