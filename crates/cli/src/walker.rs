// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File tree walking.
//!
//! Wraps the `ignore` crate's walkers. Small trees are walked on the calling
//! thread; large trees use `WalkParallel` and collect entries through a
//! channel. Every entry checks an optional shared deadline so a slow
//! filesystem cannot stall discovery indefinitely.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Instant;

use ignore::{DirEntry, WalkBuilder, WalkState};

use crate::pattern::{PatternSet, normalize_path};

/// Default number of entries above which walks run in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Walker settings.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth below the walk root.
    pub max_depth: Option<usize>,

    /// Honour `.gitignore`, `.ignore` and git exclude files.
    pub git_ignore: bool,

    /// Skip hidden files and directories.
    pub hidden: bool,

    /// Stop walking once this instant has passed.
    pub deadline: Option<Instant>,

    /// Top-level entry count (times ten) that switches to the parallel walker.
    pub parallel_threshold: usize,

    pub force_parallel: bool,
    pub force_sequential: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            git_ignore: false,
            hidden: true,
            deadline: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            force_parallel: false,
            force_sequential: false,
        }
    }
}

/// A file found by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    pub path: PathBuf,
    /// Depth below the walk root (direct children are depth 1).
    pub depth: usize,
}

/// Statistics for a single walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub files_found: usize,
    pub errors: usize,
    pub timed_out: bool,
}

/// Directories to skip, matched on their path relative to `base`.
#[derive(Debug)]
struct Prune {
    base: PathBuf,
    dirs: PatternSet,
}

impl Prune {
    fn skips(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_some_and(|t| t.is_dir()) {
            return false;
        }
        let rel = relative_path(&self.base, entry.path());
        self.dirs.is_match(&rel)
    }
}

pub struct FileWalker {
    pub(crate) config: WalkerConfig,
    prune: Option<Arc<Prune>>,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            prune: None,
        }
    }

    /// Skip directories whose path relative to `base` matches `dirs`.
    pub fn with_pruned_dirs(mut self, base: &Path, dirs: PatternSet) -> Self {
        if !dirs.is_empty() {
            self.prune = Some(Arc::new(Prune {
                base: base.to_path_buf(),
                dirs,
            }));
        }
        self
    }

    /// Walk `root` and collect all files, sorted by path.
    pub fn walk_collect(&self, root: &Path) -> (Vec<WalkedFile>, WalkStats) {
        let (mut files, stats) = if self.should_use_parallel(root) {
            self.walk_parallel(root)
        } else {
            self.walk_sequential(root)
        };
        files.sort_by(|a, b| a.path.cmp(&b.path));

        tracing::debug!(
            "walked {}: {} files, {} errors{}",
            root.display(),
            stats.files_found,
            stats.errors,
            if stats.timed_out { " (timed out)" } else { "" }
        );
        (files, stats)
    }

    /// Decide between the parallel and sequential walker.
    ///
    /// Uses the number of top-level entries as a cheap proxy for tree size.
    pub fn should_use_parallel(&self, root: &Path) -> bool {
        if self.config.force_sequential {
            return false;
        }
        if self.config.force_parallel {
            return true;
        }
        let cutoff = (self.config.parallel_threshold / 10).max(1);
        match std::fs::read_dir(root) {
            Ok(entries) => entries.take(cutoff).count() >= cutoff,
            Err(_) => false,
        }
    }

    fn builder(&self, root: &Path) -> WalkBuilder {
        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_global(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .ignore(self.config.git_ignore)
            .parents(self.config.git_ignore)
            .follow_links(false)
            .max_depth(self.config.max_depth);

        if let Some(prune) = &self.prune {
            let prune = Arc::clone(prune);
            builder.filter_entry(move |entry| !prune.skips(entry));
        }
        builder
    }

    fn walk_sequential(&self, root: &Path) -> (Vec<WalkedFile>, WalkStats) {
        let mut files = Vec::new();
        let mut stats = WalkStats::default();

        for entry in self.builder(root).build() {
            if self.deadline_passed() {
                stats.timed_out = true;
                break;
            }
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|t| t.is_file()) {
                        files.push(WalkedFile {
                            depth: entry.depth(),
                            path: entry.into_path(),
                        });
                    }
                }
                Err(e) => {
                    tracing::warn!("walk error: {}", e);
                    stats.errors += 1;
                }
            }
        }

        stats.files_found = files.len();
        (files, stats)
    }

    fn walk_parallel(&self, root: &Path) -> (Vec<WalkedFile>, WalkStats) {
        let (tx, rx) = crossbeam_channel::unbounded();
        let errors = AtomicUsize::new(0);
        let timed_out = AtomicBool::new(false);
        let deadline = self.config.deadline;

        self.builder(root).build_parallel().run(|| {
            let tx = tx.clone();
            let errors = &errors;
            let timed_out = &timed_out;
            Box::new(move |entry| {
                if deadline.is_some_and(|d| Instant::now() >= d) {
                    timed_out.store(true, Ordering::Relaxed);
                    return WalkState::Quit;
                }
                match entry {
                    Ok(entry) => {
                        if entry.file_type().is_some_and(|t| t.is_file()) {
                            let file = WalkedFile {
                                depth: entry.depth(),
                                path: entry.into_path(),
                            };
                            if tx.send(file).is_err() {
                                return WalkState::Quit;
                            }
                        }
                    }
                    Err(e) => {
                        tracing::warn!("walk error: {}", e);
                        errors.fetch_add(1, Ordering::Relaxed);
                    }
                }
                WalkState::Continue
            })
        });
        drop(tx);

        let files: Vec<WalkedFile> = rx.into_iter().collect();
        let stats = WalkStats {
            files_found: files.len(),
            errors: errors.load(Ordering::Relaxed),
            timed_out: timed_out.load(Ordering::Relaxed),
        };
        (files, stats)
    }

    fn deadline_passed(&self) -> bool {
        self.config.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Path of `path` relative to `base`, with `/` separators.
///
/// Paths outside `base` are returned whole.
pub fn relative_path(base: &Path, path: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => normalize_path(&path.to_string_lossy()),
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
