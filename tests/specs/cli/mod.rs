// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for CLI commands.

#[path = "init.rs"]
mod init;
