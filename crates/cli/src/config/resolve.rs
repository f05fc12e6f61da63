// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validated, ready-to-use settings derived from a raw [`Config`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::{Config, MetricsConfig};
use crate::coverage::{CoverageMetric, SUMMARY_FILE};
use crate::discovery::{DiscoveryOptions, RootSet};
use crate::error::ConfigError;
use crate::pattern::{PathPattern, PatternSet, normalize_ignore_patterns, strip_root_dir};
use crate::threshold::{Percent, ThresholdSpec, ThresholdTable};

/// Everything a run needs, with every pattern compiled and every
/// threshold range-checked.
#[derive(Debug, Clone)]
pub struct Settings {
    pub root_dir: PathBuf,
    pub roots: RootSet,
    pub test_pattern: PatternSet,
    pub ignore: PatternSet,
    pub coverage_globs: PatternSet,
    pub coverage_summary: PathBuf,
    pub thresholds: ThresholdTable,
    pub discovery: DiscoveryOptions,
    pub verbose: bool,
}

impl Settings {
    /// Resolve `config`, anchoring relative paths at `config_dir`.
    pub fn resolve(config: &Config, config_dir: &Path) -> Result<Self, ConfigError> {
        let root_dir = match &config.root_dir {
            Some(dir) => config_dir.join(dir),
            None => config_dir.to_path_buf(),
        };
        let root_dir = std::fs::canonicalize(&root_dir).unwrap_or(root_dir);

        if config.roots.is_empty() {
            return Err(ConfigError::Empty("roots"));
        }
        let roots = RootSet::new(
            root_dir.clone(),
            config.roots.iter().map(|r| strip_root_dir(r)),
        );

        if config.test_pattern.is_empty() {
            return Err(ConfigError::Empty("test_pattern"));
        }
        let test_pattern = PatternSet::new(config.test_pattern.iter().map(|p| strip_root_dir(p)))?;
        let ignore = PatternSet::new(normalize_ignore_patterns(&config.ignore_patterns))?;

        // No globs means every file in the report counts.
        let coverage_globs = if config.coverage_globs.is_empty() {
            PatternSet::new(super::defaults::coverage_globs())?
        } else {
            PatternSet::new(config.coverage_globs.iter().map(|p| strip_root_dir(p)))?
        };

        let coverage_summary = root_dir
            .join(strip_root_dir(&config.coverage_directory))
            .join(SUMMARY_FILE);

        Ok(Self {
            roots,
            test_pattern,
            ignore,
            coverage_globs,
            coverage_summary,
            thresholds: thresholds(config)?,
            discovery: DiscoveryOptions {
                max_depth: config.discovery.max_depth,
                git_ignore: config.discovery.gitignore,
                include_hidden: config.discovery.hidden,
                timeout: config.discovery.timeout_ms.map(Duration::from_millis),
            },
            verbose: config.verbose,
            root_dir,
        })
    }
}

fn thresholds(config: &Config) -> Result<ThresholdTable, ConfigError> {
    let mut table = ThresholdTable::new(spec(&config.thresholds.global, "global")?);
    for (path, metrics) in &config.thresholds.overrides {
        let pattern = PathPattern::new(strip_root_dir(path))?;
        table = table.with_override(pattern, spec(metrics, path)?)?;
    }
    Ok(table)
}

fn spec(metrics: &MetricsConfig, scope: &str) -> Result<ThresholdSpec, ConfigError> {
    let mut spec = ThresholdSpec::default();
    let values = [
        (CoverageMetric::Statements, metrics.statements),
        (CoverageMetric::Branches, metrics.branches),
        (CoverageMetric::Functions, metrics.functions),
        (CoverageMetric::Lines, metrics.lines),
    ];
    for (metric, value) in values {
        let Some(value) = value else { continue };
        let percent = Percent::new(value).ok_or_else(|| ConfigError::ThresholdOutOfRange {
            scope: scope.to_string(),
            metric: metric.to_string(),
            value,
        })?;
        spec.set(metric, percent);
    }
    Ok(spec)
}
