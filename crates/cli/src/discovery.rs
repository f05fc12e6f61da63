// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test file discovery.
//!
//! Walks every configured root (in parallel), keeps files that match the
//! test pattern and no ignore pattern, and returns root-dir-relative paths
//! in lexicographic order.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::error::DiscoveryError;
use crate::pattern::PatternSet;
use crate::walker::{FileWalker, WalkStats, WalkerConfig, relative_path};

/// Discovery roots, resolved against a base (root) directory.
///
/// Discovered paths are reported relative to `base`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSet {
    base: PathBuf,
    roots: BTreeSet<PathBuf>,
}

impl RootSet {
    pub fn new<I, P>(base: impl Into<PathBuf>, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let base = base.into();
        let roots = roots
            .into_iter()
            .map(|r| {
                let r = r.as_ref();
                if r.as_os_str().is_empty() {
                    base.clone()
                } else {
                    base.join(r)
                }
            })
            .collect();
        Self { base, roots }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.roots.iter()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Walk options for discovery.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions {
    pub max_depth: Option<usize>,
    pub git_ignore: bool,
    /// Include hidden files and directories.
    pub include_hidden: bool,
    /// Overall limit on the filesystem walk.
    pub timeout: Option<Duration>,
}

/// Discover test files with default options.
pub fn discover(
    roots: &RootSet,
    test_pattern: &PatternSet,
    ignore: &PatternSet,
) -> Result<Vec<String>, DiscoveryError> {
    discover_with(roots, test_pattern, ignore, &DiscoveryOptions::default())
}

/// Discover test files.
///
/// Fails if a root is missing or the timeout elapses; never returns a
/// partial list.
pub fn discover_with(
    roots: &RootSet,
    test_pattern: &PatternSet,
    ignore: &PatternSet,
    options: &DiscoveryOptions,
) -> Result<Vec<String>, DiscoveryError> {
    for root in roots.iter() {
        if !root.exists() {
            return Err(DiscoveryError::MissingRoot(root.clone()));
        }
        if !root.is_dir() {
            return Err(DiscoveryError::NotADirectory(root.clone()));
        }
    }

    let walker = FileWalker::new(WalkerConfig {
        max_depth: options.max_depth,
        git_ignore: options.git_ignore,
        hidden: !options.include_hidden,
        deadline: options.timeout.map(|t| Instant::now() + t),
        ..Default::default()
    });
    // Pruned dirs are an optimization; a set that fails to compile just
    // means every file is filtered individually.
    let walker = match ignore.directory_prefixes() {
        Ok(dirs) => walker.with_pruned_dirs(roots.base(), dirs),
        Err(e) => {
            tracing::debug!("not pruning ignored directories: {}", e);
            walker
        }
    };

    let walks: Vec<_> = roots
        .iter()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|root| walker.walk_collect(root))
        .collect();

    let mut totals = WalkStats::default();
    let mut found = BTreeSet::new();
    for (files, stats) in walks {
        totals.files_found += stats.files_found;
        totals.errors += stats.errors;
        totals.timed_out |= stats.timed_out;

        for file in files {
            // A lossy name would point at a file that does not exist.
            if file.path.to_str().is_none() {
                tracing::warn!("skipping non-UTF-8 path: {}", file.path.display());
                totals.errors += 1;
                continue;
            }
            let rel = relative_path(roots.base(), &file.path);
            if test_pattern.is_match(&rel) && !ignore.is_match(&rel) {
                found.insert(rel);
            }
        }
    }

    if totals.timed_out
        && let Some(timeout) = options.timeout
    {
        return Err(DiscoveryError::Timeout(timeout));
    }

    tracing::debug!(
        "discovered {} test files in {} roots ({} files walked, {} errors)",
        found.len(),
        roots.len(),
        totals.files_found,
        totals.errors
    );

    Ok(found.into_iter().collect())
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
