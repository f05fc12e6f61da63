// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the testgate binary, isolated from
/// the caller's environment.
pub fn testgate_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("testgate"));
    cmd.env_remove("TESTGATE_CONFIG")
        .env_remove("TESTGATE_LOG")
        .env_remove("NO_COLOR");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A throwaway project directory.
///
/// A `.git` directory is created at the root so config lookup never escapes
/// into the surrounding filesystem.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn with_config(config: &str) -> Self {
        let project = Self::empty();
        project.file("testgate.toml", config);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, path: &str, content: &str) -> &Self {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
        self
    }

    /// Write `coverage/coverage-summary.json`.
    pub fn coverage(&self, summary: &serde_json::Value) -> &Self {
        self.file("coverage/coverage-summary.json", &summary.to_string())
    }

    /// Run testgate in the project root.
    pub fn cmd(&self, args: &[&str]) -> Command {
        let mut cmd = testgate_cmd();
        cmd.args(args).current_dir(self.path());
        cmd
    }
}

/// One istanbul summary entry: `[statements, branches, functions, lines]`,
/// each as `(covered, total)`.
pub fn entry(counters: [(u64, u64); 4]) -> serde_json::Value {
    let metric = |(covered, total): (u64, u64)| {
        serde_json::json!({ "total": total, "covered": covered, "skipped": 0, "pct": 0 })
    };
    serde_json::json!({
        "statements": metric(counters[0]),
        "branches": metric(counters[1]),
        "functions": metric(counters[2]),
        "lines": metric(counters[3]),
    })
}
