// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Path and pattern normalization applied before compilation.

/// Placeholder for the project root in configured paths and patterns.
pub const ROOT_DIR_TOKEN: &str = "<rootDir>";

/// Normalize a candidate path for matching.
///
/// Converts `\` to `/` and strips any leading `./`.
pub fn normalize_path(path: &str) -> String {
    let path = if path.contains('\\') {
        path.replace('\\', "/")
    } else {
        path.to_string()
    };
    strip_dot_slash(&path).to_string()
}

/// Strip a leading `<rootDir>` token and `./` prefix.
///
/// Everything is relative to the root directory, so `<rootDir>/lib/`
/// becomes `lib/` and `./src/Helpers.js` becomes `src/Helpers.js`.
pub fn strip_root_dir(pattern: &str) -> &str {
    let rest = match pattern.strip_prefix(ROOT_DIR_TOKEN) {
        Some(rest) => rest.trim_start_matches('/'),
        None => pattern,
    };
    strip_dot_slash(rest)
}

fn strip_dot_slash(mut path: &str) -> &str {
    while let Some(rest) = path.strip_prefix("./") {
        path = rest.trim_start_matches('/');
    }
    path
}

/// Normalize ignore patterns to glob patterns.
///
/// - `dir/` → `dir/**` (trailing slash means "everything in this directory")
/// - `dir` → `dir` and `dir/**` (no wildcards: the path itself and anything below)
/// - `**/*.snap` → kept as-is
pub fn normalize_ignore_patterns(patterns: &[String]) -> Vec<String> {
    let mut normalized = Vec::with_capacity(patterns.len());
    for p in patterns {
        let p = strip_root_dir(p);
        if p.is_empty() {
            continue;
        }
        if p.ends_with('/') {
            normalized.push(format!("{}**", p));
        } else if !p.contains(['*', '?', '[', '{']) {
            normalized.push(p.to_string());
            normalized.push(format!("{}/**", p));
        } else {
            normalized.push(p.to_string());
        }
    }
    normalized
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
