// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;
use std::time::Duration;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error. Every variant aborts the pipeline.
///
/// Threshold failures are not errors: they are reported through
/// [`crate::threshold::Evaluation`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Coverage(#[from] CoverageError),

    #[error("i/o error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Problems found while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("unsupported config version {0} (expected 1)")]
    UnsupportedVersion(i64),

    #[error("invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("threshold for {metric} in {scope} must be within 0..=100, got {value}")]
    ThresholdOutOfRange {
        scope: String,
        metric: String,
        value: f64,
    },

    #[error("override `{0}` does not set any metric")]
    EmptyOverride(String),

    #[error("`{0}` must not be empty")]
    Empty(&'static str),

    #[error("{} already exists (use --force to overwrite)", .0.display())]
    Exists(PathBuf),
}

/// Fatal problems while locating test files.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("root does not exist: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("discovery timed out after {0:?}")]
    Timeout(Duration),
}

/// Problems with the coverage data handed to us by the instrumentation engine.
#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    #[error("coverage summary not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to parse coverage summary: {0}")]
    Parse(String),

    #[error("{path}: {metric} covered count {covered} exceeds total {total}")]
    CoveredExceedsTotal {
        path: String,
        metric: String,
        covered: u64,
        total: u64,
    },
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    ThresholdFailure = 1,
    ConfigError = 2,
    DiscoveryError = 3,
    InputError = 4,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config(_) => ExitCode::ConfigError,
            Error::Discovery(_) => ExitCode::DiscoveryError,
            Error::Coverage(_) | Error::Io { .. } => ExitCode::InputError,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
