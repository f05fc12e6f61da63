// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for configuration.
//!
//! Every configuration problem exits with code 2 before any discovery runs.

#![allow(clippy::unwrap_used, clippy::expect_used)]

#[path = "validation.rs"]
mod validation;
