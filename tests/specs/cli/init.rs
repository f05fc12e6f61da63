// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `testgate init`.

use crate::prelude::*;

/// > testgate init creates testgate.toml in current directory
#[test]
fn init_creates_testgate_toml_in_current_directory() {
    let temp = Project::empty();

    temp.cmd(&["init"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Created"));

    assert!(temp.path().join("testgate.toml").exists());
}

/// > The generated config is valid
#[test]
fn init_output_passes_config_validation() {
    let temp = Project::empty();
    temp.cmd(&["init"]).assert().success();

    temp.cmd(&["check", "--config-only"]).assert().success();
}

/// > Refuses to overwrite existing testgate.toml without --force
#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = Project::with_config("version = 1\n# existing\n");

    temp.cmd(&["init"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("already exists"))
        .stderr(predicates::str::contains("--force"));

    let config = std::fs::read_to_string(temp.path().join("testgate.toml")).unwrap();
    assert!(config.contains("# existing"));
}

/// > --force overwrites existing testgate.toml
#[test]
fn init_force_overwrites_existing_config() {
    let temp = Project::with_config("version = 1\n# existing content\n");

    temp.cmd(&["init", "--force"]).assert().success();

    let config = std::fs::read_to_string(temp.path().join("testgate.toml")).unwrap();
    assert!(!config.contains("# existing content"));
    assert!(config.contains("[thresholds.global]"));
}

/// > -C chooses where init writes
#[test]
fn init_honours_config_flag() {
    let temp = Project::empty();
    std::fs::create_dir(temp.path().join("ci")).unwrap();

    temp.cmd(&["init", "-C", "ci/testgate.toml"]).assert().success();

    assert!(temp.path().join("ci/testgate.toml").exists());
    assert!(!temp.path().join("testgate.toml").exists());
}
