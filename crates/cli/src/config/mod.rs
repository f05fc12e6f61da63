// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading.
//!
//! `testgate.toml` is deserialized into [`Config`] (raw, as written) and then
//! resolved into [`Settings`] (patterns compiled, thresholds range-checked,
//! paths anchored at the root directory). All validation happens here so
//! configuration errors surface before any filesystem walk.

pub mod defaults;
mod locate;
mod resolve;

pub use locate::{CONFIG_FILE, find_config};
pub use resolve::Settings;

use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::{ConfigError, Result};

/// Raw configuration as written in `testgate.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub version: i64,

    /// Raise log verbosity to debug.
    #[serde(default)]
    pub verbose: bool,

    /// Directory `<rootDir>` refers to. Defaults to the config file's directory.
    #[serde(default)]
    pub root_dir: Option<PathBuf>,

    /// Directories to search for tests.
    #[serde(default = "defaults::roots")]
    pub roots: Vec<String>,

    /// Glob(s) a test file must match.
    #[serde(default = "defaults::test_patterns", deserialize_with = "string_or_list")]
    pub test_pattern: Vec<String>,

    /// Paths excluded from discovery (alias: `ignore`).
    #[serde(default = "defaults::ignore_patterns", alias = "ignore")]
    pub ignore_patterns: Vec<String>,

    /// Files whose coverage counts toward thresholds.
    #[serde(default = "defaults::coverage_globs")]
    pub coverage_globs: Vec<String>,

    /// Where the coverage summary is written, relative to the root directory.
    #[serde(default = "defaults::coverage_directory")]
    pub coverage_directory: String,

    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::VERSION,
            verbose: false,
            root_dir: None,
            roots: defaults::roots(),
            test_pattern: defaults::test_patterns(),
            ignore_patterns: defaults::ignore_patterns(),
            coverage_globs: defaults::coverage_globs(),
            coverage_directory: defaults::coverage_directory(),
            discovery: DiscoveryConfig::default(),
            thresholds: ThresholdsConfig::default(),
        }
    }
}

/// `[discovery]` walk settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// Maximum directory depth below each root.
    pub max_depth: Option<usize>,

    /// Honour `.gitignore` files.
    pub gitignore: bool,

    /// Include hidden files and directories.
    pub hidden: bool,

    /// Abort discovery after this many milliseconds.
    pub timeout_ms: Option<u64>,
}

/// `[thresholds]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThresholdsConfig {
    pub global: MetricsConfig,

    /// Per-path overrides, in declaration order.
    #[serde(deserialize_with = "ordered_table")]
    pub overrides: Vec<(String, MetricsConfig)>,
}

/// Raw percentages per metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetricsConfig {
    pub statements: Option<f64>,
    pub branches: Option<f64>,
    pub functions: Option<f64>,
    pub lines: Option<f64>,
}

/// Parse configuration from TOML text.
pub fn parse(content: &str, path: &Path) -> std::result::Result<Config, ConfigError> {
    let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if config.version != defaults::VERSION {
        return Err(ConfigError::UnsupportedVersion(config.version));
    }
    Ok(config)
}

/// Load configuration from a file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse(&content, path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
}

fn string_or_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrList::deserialize(deserializer)? {
        StringOrList::One(s) => vec![s],
        StringOrList::Many(v) => v,
    })
}

/// Deserialize a table into key/value pairs, keeping document order.
fn ordered_table<'de, D, V>(deserializer: D) -> std::result::Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct OrderedVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a table of path thresholds")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
            let mut entries = Vec::new();
            while let Some((key, value)) = map.next_entry()? {
                entries.push((key, value));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedVisitor(PhantomData))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
