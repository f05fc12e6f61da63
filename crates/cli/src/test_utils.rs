// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::config::CONFIG_FILE;

/// Creates a temp directory with the given testgate.toml content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), config).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = TempDir::new().unwrap();
/// create_tree(tmp.path(), &[
///     ("src/Form.res.js", ""),
///     ("src/Form_Test.res.js", ""),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// A coverage-summary.json body for the given `(path, [stmts, branches, fns, lines])`
/// entries, each counter as `(covered, total)`.
pub fn summary_json(files: &[(&str, [(u64, u64); 4])]) -> String {
    let mut map = serde_json::Map::new();
    for (path, counters) in files {
        let mut entry = serde_json::Map::new();
        for (name, (covered, total)) in ["statements", "branches", "functions", "lines"]
            .iter()
            .zip(counters.iter())
        {
            entry.insert(
                (*name).to_string(),
                serde_json::json!({ "total": total, "covered": covered, "skipped": 0, "pct": 0 }),
            );
        }
        map.insert((*path).to_string(), serde_json::Value::Object(entry));
    }
    serde_json::Value::Object(map).to_string()
}
