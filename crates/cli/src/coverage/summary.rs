// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reader for istanbul `json-summary` coverage reports.
//!
//! ```json
//! { "total": { ... },
//!   "/abs/path/src/a.js": { "lines": { "total": 10, "covered": 5, "pct": 50 }, ... } }
//! ```
//!
//! The `total` entry is ignored; totals are recomputed from the files that
//! match the configured coverage globs.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::{CoverageMetric, Counter, FileCoverage};
use crate::error::{CoverageError, Error, Result};
use crate::pattern::normalize_path;
use crate::walker::relative_path;

/// File name written by the `json-summary` reporter.
pub const SUMMARY_FILE: &str = "coverage-summary.json";

const TOTAL_KEY: &str = "total";

#[derive(Debug, Deserialize)]
struct SummaryEntry {
    statements: Option<RawCounter>,
    branches: Option<RawCounter>,
    functions: Option<RawCounter>,
    lines: Option<RawCounter>,
}

#[derive(Debug, Deserialize)]
struct RawCounter {
    total: u64,
    covered: u64,
}

impl SummaryEntry {
    fn counters(&self) -> impl Iterator<Item = (CoverageMetric, &RawCounter)> {
        [
            (CoverageMetric::Statements, &self.statements),
            (CoverageMetric::Branches, &self.branches),
            (CoverageMetric::Functions, &self.functions),
            (CoverageMetric::Lines, &self.lines),
        ]
        .into_iter()
        .filter_map(|(metric, counter)| counter.as_ref().map(|c| (metric, c)))
    }
}

/// Parse summary JSON. Absolute paths under `base` become relative to it.
pub fn parse_summary(json: &str, base: &Path) -> std::result::Result<FileCoverage, CoverageError> {
    let entries: BTreeMap<String, SummaryEntry> =
        serde_json::from_str(json).map_err(|e| CoverageError::Parse(e.to_string()))?;

    let mut coverage = FileCoverage::new();
    for (key, entry) in &entries {
        if key == TOTAL_KEY {
            continue;
        }
        let path = normalize_coverage_path(key, base);
        for (metric, raw) in entry.counters() {
            coverage.insert(path.clone(), metric, Counter::new(raw.covered, raw.total))?;
        }
    }
    Ok(coverage)
}

/// Read and parse a summary file.
pub fn load_summary(path: &Path, base: &Path) -> Result<FileCoverage> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CoverageError::NotFound(path.to_path_buf()).into());
        }
        Err(e) => return Err(Error::io(path, e)),
    };
    let coverage = parse_summary(&json, base)?;
    tracing::debug!("loaded coverage for {} files from {}", coverage.len(), path.display());
    Ok(coverage)
}

fn normalize_coverage_path(key: &str, base: &Path) -> String {
    let path = Path::new(key);
    if path.is_absolute() && path.starts_with(base) {
        relative_path(base, path)
    } else {
        normalize_path(key)
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
