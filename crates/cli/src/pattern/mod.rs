// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob pattern matching for test discovery, ignore rules and coverage globs.
//!
//! Patterns are compiled once into `globset` automata with
//! `literal_separator` enabled, so `*` never crosses a `/` and every match
//! is anchored to the whole path.

pub mod normalize;

pub use normalize::{ROOT_DIR_TOKEN, normalize_ignore_patterns, normalize_path, strip_root_dir};

use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};

use crate::error::ConfigError;

/// A single compiled glob pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
    source: String,
    matcher: GlobMatcher,
}

impl PathPattern {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let glob = compile(pattern)?;
        Ok(Self {
            source: pattern.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    /// The pattern text as written in config (after normalization).
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True when the pattern contains no glob metacharacters and therefore
    /// matches exactly one path.
    pub fn is_literal(&self) -> bool {
        !has_glob_meta(&self.source)
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.matcher.is_match(normalize_path(path))
    }
}

/// Anchored match of `path` against `pattern`.
pub fn matches(pattern: &PathPattern, path: &str) -> bool {
    pattern.is_match(path)
}

/// A set of patterns compiled together. Matches when any member matches.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<PathPattern>,
    set: GlobSet,
}

impl Default for PatternSet {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            set: GlobSet::empty(),
        }
    }
}

impl PatternSet {
    pub fn new<I, S>(patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        let mut compiled = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            builder.add(compile(pattern)?);
            compiled.push(PathPattern::new(pattern)?);
        }
        let set = builder.build().map_err(|e| ConfigError::InvalidPattern {
            pattern: compiled
                .iter()
                .map(PathPattern::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            message: e.to_string(),
        })?;
        Ok(Self {
            patterns: compiled,
            set,
        })
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.set.is_match(normalize_path(path))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn patterns(&self) -> &[PathPattern] {
        &self.patterns
    }

    /// Directory patterns implied by `dir/**` members.
    ///
    /// A directory matching one of these has every descendant matched by
    /// the original set, so walkers can skip it entirely.
    pub fn directory_prefixes(&self) -> Result<PatternSet, ConfigError> {
        PatternSet::new(
            self.patterns
                .iter()
                .filter_map(|p| p.as_str().strip_suffix("/**"))
                .filter(|p| !p.is_empty()),
        )
    }
}

fn compile(pattern: &str) -> Result<Glob, ConfigError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}

fn has_glob_meta(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', ']', '{', '}'])
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
