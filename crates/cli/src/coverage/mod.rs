// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage data model and aggregation.
//!
//! Counters come from an external instrumentation engine; this module only
//! validates, filters and sums them.

pub mod aggregate;
pub mod summary;

pub use aggregate::{Aggregate, Percentages, aggregate, aggregate_with};
pub use summary::{SUMMARY_FILE, load_summary, parse_summary};

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoverageError;

/// A coverage dimension reported by the instrumentation engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CoverageMetric {
    Statements,
    Branches,
    Functions,
    Lines,
}

impl CoverageMetric {
    /// All metrics in reporting order.
    pub const ALL: [CoverageMetric; 4] = [
        CoverageMetric::Statements,
        CoverageMetric::Branches,
        CoverageMetric::Functions,
        CoverageMetric::Lines,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CoverageMetric::Statements => "statements",
            CoverageMetric::Branches => "branches",
            CoverageMetric::Functions => "functions",
            CoverageMetric::Lines => "lines",
        }
    }
}

impl fmt::Display for CoverageMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Covered and total counts for one metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    pub covered: u64,
    pub total: u64,
}

impl Counter {
    pub fn new(covered: u64, total: u64) -> Self {
        Self { covered, total }
    }

    /// Percentage covered. Zero when there is nothing to cover.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.covered as f64 * 100.0) / self.total as f64
        }
    }
}

/// Counters for one file, keyed by metric.
pub type MetricCounters = BTreeMap<CoverageMetric, Counter>;

/// Raw per-file coverage counters, keyed by root-relative path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileCoverage {
    files: BTreeMap<String, MetricCounters>,
}

impl FileCoverage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a counter, rejecting `covered > total`.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        metric: CoverageMetric,
        counter: Counter,
    ) -> Result<(), CoverageError> {
        let path = path.into();
        if counter.covered > counter.total {
            return Err(CoverageError::CoveredExceedsTotal {
                path,
                metric: metric.to_string(),
                covered: counter.covered,
                total: counter.total,
            });
        }
        self.files.entry(path).or_default().insert(metric, counter);
        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&MetricCounters> {
        self.files.get(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetricCounters)> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
