// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for config validation.

use crate::prelude::*;

fn assert_config_error(config: &str, message: &str) {
    let temp = Project::with_config(config);
    temp.file("src/a_Test.js", "");

    temp.cmd(&["check"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains(message));
}

/// > Valid config passes --config-only
#[test]
fn valid_config_passes_config_only() {
    let temp = Project::with_config("version = 1\nroots = [\"src\"]\n");

    temp.cmd(&["check", "--config-only"])
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

/// > --config-only does not need roots or coverage to exist
#[test]
fn config_only_skips_discovery() {
    let temp = Project::with_config("version = 1\nroots = [\"missing\"]\n");

    temp.cmd(&["check", "--config-only"]).assert().success();
}

#[test]
fn unknown_key_is_a_config_error() {
    assert_config_error("version = 1\ncoverage_dir = \"x\"\n", "unknown field");
}

#[test]
fn toml_syntax_error_is_a_config_error() {
    assert_config_error("version = \n", "testgate.toml");
}

#[test]
fn unsupported_version_is_a_config_error() {
    assert_config_error("version = 3\n", "unsupported config version 3");
}

#[test]
fn malformed_pattern_is_a_config_error() {
    assert_config_error(
        "version = 1\ntest_pattern = \"src/[\"\n",
        "invalid pattern `src/[`",
    );
}

#[test]
fn out_of_range_threshold_is_a_config_error() {
    assert_config_error(
        "version = 1\n[thresholds.global]\nbranches = 150\n",
        "threshold for branches in global",
    );
}

#[test]
fn empty_override_is_a_config_error() {
    assert_config_error(
        "version = 1\n[thresholds.overrides.\"src/a.js\"]\n",
        "does not set any metric",
    );
}

#[test]
fn empty_roots_is_a_config_error() {
    assert_config_error("version = 1\nroots = []\n", "`roots` must not be empty");
}

/// > An explicit config path that does not exist is a config error
#[test]
fn missing_explicit_config_is_a_config_error() {
    let temp = Project::empty();

    temp.cmd(&["check", "-C", "nope.toml"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read"));
}

/// > TESTGATE_CONFIG selects the config file
#[test]
fn config_env_var_selects_config() {
    let temp = Project::empty();
    temp.file("ci/gate.toml", "version = 2\n");

    temp.cmd(&["check"])
        .env("TESTGATE_CONFIG", "ci/gate.toml")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 2"));
}

/// > Config is found in a parent directory
#[test]
fn config_is_found_from_subdirectory() {
    let temp = Project::with_config("version = 1\nroots = [\"src\"]\ntest_pattern = \"**/*_Test.js\"\n");
    temp.file("src/deep/a_Test.js", "");

    testgate_cmd()
        .arg("discover")
        .current_dir(temp.path().join("src/deep"))
        .assert()
        .success()
        .stdout("src/deep/a_Test.js\n");
}
