// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file and global coverage percentages.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{CoverageMetric, Counter, FileCoverage};
use crate::pattern::PatternSet;

/// Percentages keyed by metric.
pub type Percentages = BTreeMap<CoverageMetric, f64>;

/// Running Σcovered / Σtotal for one metric. Widened so that summing
/// many `u64` counters cannot overflow.
#[derive(Debug, Clone, Copy, Default)]
struct Sum {
    covered: u128,
    total: u128,
}

impl Sum {
    fn add(&mut self, counter: &Counter) {
        self.covered += u128::from(counter.covered);
        self.total += u128::from(counter.total);
    }

    fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.covered as f64 * 100.0) / self.total as f64
        }
    }
}

/// Result of aggregating raw counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregate {
    /// Files matched by the coverage globs.
    pub per_file: BTreeMap<String, Percentages>,
    /// Total-weighted percentages across `per_file`.
    pub global: Percentages,
}

/// Aggregate counters for files matching `globs`.
///
/// Global percentages are Σcovered / Σtotal, not a mean of per-file
/// percentages. A metric nothing contributes to is 100%.
pub fn aggregate(globs: &PatternSet, raw: &FileCoverage) -> Aggregate {
    aggregate_with(globs, raw, |_, _| true)
}

/// Like [`aggregate`], but only counters for which `contributes` returns
/// true are summed into the global percentages. Per-file percentages are
/// unaffected.
pub fn aggregate_with<F>(globs: &PatternSet, raw: &FileCoverage, contributes: F) -> Aggregate
where
    F: Fn(&str, CoverageMetric) -> bool,
{
    let mut per_file = BTreeMap::new();
    let mut sums: BTreeMap<CoverageMetric, Sum> = BTreeMap::new();
    let mut excluded = 0usize;

    for (path, counters) in raw.iter() {
        if !globs.is_match(path) {
            excluded += 1;
            continue;
        }

        let percentages: Percentages = counters
            .iter()
            .map(|(metric, counter)| (*metric, counter.percentage()))
            .collect();
        per_file.insert(path.clone(), percentages);

        for (metric, counter) in counters {
            if contributes(path, *metric) {
                sums.entry(*metric).or_default().add(counter);
            }
        }
    }

    let global = CoverageMetric::ALL
        .iter()
        .map(|metric| {
            let pct = sums.get(metric).map_or(100.0, Sum::percentage);
            (*metric, pct)
        })
        .collect();

    tracing::debug!(
        "aggregated coverage: {} files included, {} excluded",
        per_file.len(),
        excluded
    );

    Aggregate { per_file, global }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
