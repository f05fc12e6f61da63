// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage thresholds: a global spec plus per-path overrides.

pub mod evaluate;

pub use evaluate::{Evaluation, Scope, Verdict, evaluate};

use std::cmp::Ordering;

use serde::Serialize;

use crate::coverage::CoverageMetric;
use crate::error::ConfigError;
use crate::pattern::PathPattern;

/// A percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Percent(f64);

impl Percent {
    /// Returns `None` for values outside `0..=100` (including NaN).
    pub fn new(value: f64) -> Option<Self> {
        (0.0..=100.0).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Minimum percentages, one optional value per metric.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThresholdSpec {
    pub statements: Option<Percent>,
    pub branches: Option<Percent>,
    pub functions: Option<Percent>,
    pub lines: Option<Percent>,
}

impl ThresholdSpec {
    pub fn get(&self, metric: CoverageMetric) -> Option<Percent> {
        match metric {
            CoverageMetric::Statements => self.statements,
            CoverageMetric::Branches => self.branches,
            CoverageMetric::Functions => self.functions,
            CoverageMetric::Lines => self.lines,
        }
    }

    pub fn set(&mut self, metric: CoverageMetric, value: Percent) {
        let slot = match metric {
            CoverageMetric::Statements => &mut self.statements,
            CoverageMetric::Branches => &mut self.branches,
            CoverageMetric::Functions => &mut self.functions,
            CoverageMetric::Lines => &mut self.lines,
        };
        *slot = Some(value);
    }

    /// Configured thresholds in metric reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (CoverageMetric, Percent)> + '_ {
        CoverageMetric::ALL
            .into_iter()
            .filter_map(|metric| self.get(metric).map(|pct| (metric, pct)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// A per-path threshold replacing the global check for the metrics it sets.
#[derive(Debug, Clone)]
pub struct Override {
    pub pattern: PathPattern,
    pub spec: ThresholdSpec,
}

impl Override {
    /// Literal paths beat patterns; longer patterns beat shorter ones.
    fn specificity(&self) -> (bool, usize) {
        (self.pattern.is_literal(), self.pattern.as_str().len())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThresholdTable {
    pub global: ThresholdSpec,
    overrides: Vec<Override>,
}

impl ThresholdTable {
    pub fn new(global: ThresholdSpec) -> Self {
        Self {
            global,
            overrides: Vec::new(),
        }
    }

    /// Append an override. Overrides that set no metric are rejected.
    pub fn with_override(
        mut self,
        pattern: PathPattern,
        spec: ThresholdSpec,
    ) -> Result<Self, ConfigError> {
        if spec.is_empty() {
            return Err(ConfigError::EmptyOverride(pattern.as_str().to_string()));
        }
        self.overrides.push(Override { pattern, spec });
        Ok(self)
    }

    pub fn overrides(&self) -> &[Override] {
        &self.overrides
    }

    /// The most specific override matching `path`.
    ///
    /// Ties are broken by declaration order, first wins.
    pub fn override_for(&self, path: &str) -> Option<&Override> {
        self.overrides
            .iter()
            .enumerate()
            .filter(|(_, o)| o.pattern.is_match(path))
            .max_by(|(ia, a), (ib, b)| match a.specificity().cmp(&b.specificity()) {
                Ordering::Equal => ib.cmp(ia),
                other => other,
            })
            .map(|(_, o)| o)
    }

    /// True when an override for `path` sets `metric`, so the file's
    /// counters for that metric are checked there instead of globally.
    pub fn overridden(&self, path: &str, metric: CoverageMetric) -> bool {
        self.override_for(path)
            .is_some_and(|o| o.spec.get(metric).is_some())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
