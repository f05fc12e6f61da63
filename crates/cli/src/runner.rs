// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Gate runner.
//!
//! Chains the stages: discover tests, load coverage, aggregate, evaluate.
//! Each stage consumes the previous stage's complete output; errors abort
//! the run, threshold failures do not.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::coverage::{Aggregate, aggregate_with, load_summary};
use crate::discovery::discover_with;
use crate::error::Result;
use crate::threshold::{Evaluation, evaluate};

/// Result of a full `check` run.
#[derive(Debug)]
pub struct Outcome {
    pub tests: Vec<String>,
    pub aggregate: Aggregate,
    pub evaluation: Evaluation,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.evaluation.passed()
    }
}

pub struct Runner<'a> {
    settings: &'a Settings,
    coverage: Option<PathBuf>,
}

impl<'a> Runner<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            coverage: None,
        }
    }

    /// Read coverage from `path` instead of the configured summary location.
    pub fn with_coverage(mut self, path: impl Into<PathBuf>) -> Self {
        self.coverage = Some(path.into());
        self
    }

    fn coverage_path(&self) -> &Path {
        self.coverage
            .as_deref()
            .unwrap_or(&self.settings.coverage_summary)
    }

    /// Discover test files.
    pub fn discover(&self) -> Result<Vec<String>> {
        let s = self.settings;
        Ok(discover_with(
            &s.roots,
            &s.test_pattern,
            &s.ignore,
            &s.discovery,
        )?)
    }

    /// Discover, aggregate and evaluate.
    ///
    /// Counters for metrics an override checks are left out of the global
    /// sum, so each file/metric pair is checked exactly once.
    pub fn check(&self) -> Result<Outcome> {
        let tests = self.discover()?;
        tracing::info!("discovered {} test files", tests.len());

        let raw = load_summary(self.coverage_path(), &self.settings.root_dir)?;
        let table = &self.settings.thresholds;
        let aggregate = aggregate_with(&self.settings.coverage_globs, &raw, |path, metric| {
            !table.overridden(path, metric)
        });
        let evaluation = evaluate(table, &aggregate);

        Ok(Outcome {
            tests,
            aggregate,
            evaluation,
        })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
