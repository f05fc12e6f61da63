// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! [`super::Config`] fields delegate to these via `#[serde(default = ...)]`.

/// The only supported config version.
pub const VERSION: i64 = 1;

/// Search the whole root directory.
pub fn roots() -> Vec<String> {
    vec!["<rootDir>".to_string()]
}

/// Files under `__tests__` and `*.test.*` / `*.spec.*` files.
pub fn test_patterns() -> Vec<String> {
    vec![
        "**/__tests__/**/*.{js,jsx,ts,tsx}".to_string(),
        "**/*.{spec,test}.{js,jsx,ts,tsx}".to_string(),
    ]
}

pub fn ignore_patterns() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

pub fn coverage_globs() -> Vec<String> {
    vec!["**".to_string()]
}

pub fn coverage_directory() -> String {
    "coverage".to_string()
}
