// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `testgate check`.

use serde_json::json;

use crate::prelude::*;

const CONFIG: &str = r#"
version = 1
roots = ["<rootDir>/src"]
test_pattern = "**/*_Test.res.js"
coverage_globs = ["src/**/*.res.js"]

[thresholds.global]
statements = 10

[thresholds.overrides."./src/Helpers.res.js"]
statements = 100
"#;

fn project(helpers_statements: (u64, u64)) -> Project {
    let temp = Project::with_config(CONFIG);
    temp.file("src/Form.res.js", "")
        .file("src/Form_Test.res.js", "")
        .file("src/Helpers.res.js", "");
    temp.coverage(&json!({
        "total": entry([(0, 0), (0, 0), (0, 0), (0, 0)]),
        "src/Form.res.js": entry([(10, 100), (1, 4), (2, 4), (10, 100)]),
        "src/Helpers.res.js": entry([helpers_statements, (0, 0), (1, 1), (9, 10)]),
    }));
    temp
}

// =============================================================================
// EXIT CODES
// =============================================================================

/// > The reform fixture meets its thresholds
#[test]
fn fixture_passes() {
    testgate_cmd()
        .arg("check")
        .current_dir(fixture("reform"))
        .assert()
        .success()
        .stdout(predicates::str::contains("tests: 2 files discovered"))
        .stdout(predicates::str::contains("PASS"));
}

/// > Global threshold equal to the actual value passes
#[test]
fn equality_passes() {
    project((10, 10)).cmd(&["check"]).assert().success();
}

/// > Override failures exit 1 and name file, metric, actual and required
#[test]
fn override_failure_exits_1() {
    project((999, 1000))
        .cmd(&["check"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains(
            "FAIL src/Helpers.res.js statements: 99.90% < 100.00%",
        ))
        .stdout(predicates::str::contains("FAIL: 1 of 2 thresholds not met"));
}

/// > Every failing verdict is reported, not just the first
#[test]
fn all_failures_are_reported() {
    let temp = project((0, 10));
    temp.file(
        "testgate.toml",
        &CONFIG.replace("statements = 10\n", "statements = 50\nlines = 50\n"),
    );

    temp.cmd(&["check"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("FAIL global statements: 10.00% < 50.00%"))
        .stdout(predicates::str::contains("FAIL global lines:"))
        .stdout(predicates::str::contains("FAIL src/Helpers.res.js statements: 0.00% < 100.00%"));
}

/// > A missing coverage summary exits 4
#[test]
fn missing_coverage_exits_4() {
    let temp = Project::with_config(CONFIG);
    temp.file("src/Form_Test.res.js", "");

    temp.cmd(&["check"])
        .assert()
        .code(4)
        .stderr(predicates::str::contains("coverage summary not found"));
}

/// > Malformed coverage exits 4
#[test]
fn malformed_coverage_exits_4() {
    let temp = project((1, 1));
    temp.file("coverage/coverage-summary.json", "{ not json");

    temp.cmd(&["check"])
        .assert()
        .code(4)
        .stderr(predicates::str::contains("failed to parse coverage summary"));
}

/// > covered > total is rejected
#[test]
fn covered_exceeding_total_exits_4() {
    let temp = project((1, 1));
    temp.coverage(&json!({ "src/Form.res.js": entry([(5, 4), (0, 0), (0, 0), (0, 0)]) }));

    temp.cmd(&["check"])
        .assert()
        .code(4)
        .stderr(predicates::str::contains("exceeds total"));
}

/// > Discovery errors exit 3 before coverage is read
#[test]
fn missing_root_exits_3() {
    let temp = Project::with_config(CONFIG);

    temp.cmd(&["check"]).assert().code(3);
}

/// > --coverage reads a summary from another location
#[test]
fn coverage_flag_overrides_location() {
    let temp = project((0, 10));
    temp.file(
        "out/summary.json",
        &json!({ "src/Helpers.res.js": entry([(10, 10), (0, 0), (0, 0), (0, 0)]) }).to_string(),
    );

    temp.cmd(&["check", "--coverage", "out/summary.json"])
        .assert()
        .success();
}

// =============================================================================
// OUTPUT
// =============================================================================

/// > -o json emits the structured verdicts
#[test]
fn json_output() {
    let output = project((999, 1000))
        .cmd(&["check", "-o", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["passed"], false);
    assert_eq!(value["tests"], json!(["src/Form_Test.res.js"]));
    assert_eq!(value["global"]["statements"], 10.0);
    assert!(value["generated"].as_str().unwrap().contains('T'));
    assert_eq!(
        value["verdicts"],
        json!([
            {"scope": "global", "metric": "statements", "actual": 10.0, "required": 10.0, "passed": true},
            {"scope": "src/Helpers.res.js", "metric": "statements", "actual": 99.9, "required": 100.0, "passed": false},
        ])
    );
    assert_eq!(value["unmatched_overrides"], json!([]));
}

/// > Piped text output carries no ANSI escapes unless forced
#[test]
fn color_is_opt_in_when_piped() {
    let plain = project((10, 10)).cmd(&["check"]).output().unwrap();
    assert!(!String::from_utf8_lossy(&plain.stdout).contains('\u{1b}'));

    let forced = project((10, 10))
        .cmd(&["check", "--color", "always"])
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&forced.stdout).contains('\u{1b}'));

    let disabled = project((10, 10))
        .cmd(&["check", "--color", "always", "--no-color"])
        .output()
        .unwrap();
    assert!(!String::from_utf8_lossy(&disabled.stdout).contains('\u{1b}'));
}

/// > An override that matches nothing is a warning, not a failure
#[test]
fn unmatched_override_warns() {
    let temp = project((10, 10));
    temp.file(
        "testgate.toml",
        &format!("{CONFIG}\n[thresholds.overrides.\"src/Gone.res.js\"]\nlines = 90\n"),
    );

    temp.cmd(&["check"])
        .assert()
        .success()
        .stderr(predicates::str::contains("src/Gone.res.js"));
}
