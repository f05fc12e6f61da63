// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test discovery and coverage threshold enforcement.
//!
//! The stages are pure functions over in-memory data, except discovery's
//! filesystem walk:
//!
//! 1. [`discovery::discover`] finds test files under the configured roots.
//! 2. [`coverage::load_summary`] reads per-file counters.
//! 3. [`coverage::aggregate`] computes per-file and total-weighted percentages.
//! 4. [`threshold::evaluate`] compares them against a [`threshold::ThresholdTable`].
//!
//! [`runner::Runner`] chains them from a resolved [`config::Settings`].

pub mod cli;
pub mod color;
pub mod config;
pub mod coverage;
pub mod discovery;
pub mod error;
pub mod pattern;
pub mod report;
pub mod runner;
pub mod threshold;
pub mod walker;

#[cfg(test)]
mod test_utils;

pub use error::{Error, ExitCode, Result};
