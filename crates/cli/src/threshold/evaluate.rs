// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Threshold evaluation.
//!
//! Produces one verdict per checked (scope, metric) pair and never stops at
//! the first failure, so every deficiency is reported in a single run.

use std::fmt;

use serde::{Serialize, Serializer};

use super::{Percent, ThresholdTable};
use crate::coverage::{Aggregate, CoverageMetric};

/// What a verdict applies to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Scope {
    Global,
    File(String),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => f.write_str("global"),
            Scope::File(path) => f.write_str(path),
        }
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub scope: Scope,
    pub metric: CoverageMetric,
    pub actual: f64,
    pub required: f64,
    pub passed: bool,
}

impl Verdict {
    /// Fails only when `actual` is strictly below `required`.
    fn check(scope: Scope, metric: CoverageMetric, actual: f64, required: Percent) -> Self {
        let required = required.value();
        Self {
            scope,
            metric,
            actual,
            required,
            passed: actual >= required,
        }
    }
}

/// All verdicts for a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Evaluation {
    verdicts: Vec<Verdict>,
    unmatched_overrides: Vec<String>,
}

impl Evaluation {
    /// True iff no verdict failed.
    pub fn passed(&self) -> bool {
        self.verdicts.iter().all(|v| v.passed)
    }

    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    pub fn failures(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| !v.passed)
    }

    /// Override patterns that matched none of the aggregated files.
    pub fn unmatched_overrides(&self) -> &[String] {
        &self.unmatched_overrides
    }
}

/// Evaluate aggregated coverage against `table`.
pub fn evaluate(table: &ThresholdTable, aggregate: &Aggregate) -> Evaluation {
    let mut verdicts = Vec::new();

    for (metric, required) in table.global.iter() {
        let actual = aggregate.global.get(&metric).copied().unwrap_or(100.0);
        verdicts.push(Verdict::check(Scope::Global, metric, actual, required));
    }

    for (path, percentages) in &aggregate.per_file {
        let Some(over) = table.override_for(path) else {
            continue;
        };
        for (metric, required) in over.spec.iter() {
            let actual = percentages.get(&metric).copied().unwrap_or(0.0);
            verdicts.push(Verdict::check(
                Scope::File(path.clone()),
                metric,
                actual,
                required,
            ));
        }
    }

    let unmatched_overrides: Vec<String> = table
        .overrides()
        .iter()
        .filter(|o| !aggregate.per_file.keys().any(|p| o.pattern.is_match(p)))
        .map(|o| o.pattern.as_str().to_string())
        .collect();
    for pattern in &unmatched_overrides {
        tracing::warn!("coverage threshold override `{}` matched no files", pattern);
    }

    let evaluation = Evaluation {
        verdicts,
        unmatched_overrides,
    };
    tracing::debug!(
        "evaluated {} verdicts, {} failing",
        evaluation.verdicts.len(),
        evaluation.failures().count()
    );
    evaluation
}

#[cfg(test)]
#[path = "evaluate_tests.rs"]
mod tests;
