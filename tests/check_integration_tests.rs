//! Integration tests for the `check` command.
//!
//! Collaborators are shell scripts, so these only run on unix.
#![cfg(unix)]

mod common;

use common::{SCRIPTED_CONFIG, TestFixture};
use predicates::prelude::*;

fn scripted_project() -> TestFixture {
    let fixture = TestFixture::new();
    fixture.create_config(SCRIPTED_CONFIG);
    fixture.create_rule_sets();
    fixture.create_java_sources();
    fixture
}

// =============================================================================
// Passing and failing gates
// =============================================================================

#[test]
fn check_passes_on_clean_sources() {
    let fixture = scripted_project();

    style_gate!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ PASSED: blocks (style)"))
        .stdout(predicate::str::contains("✓ PASSED: cpd (duplicates)"))
        .stdout(predicate::str::contains(
            "Summary: 4 suites, 4 passed, 0 failed (2 files)",
        ));
}

#[test]
fn check_fails_on_style_violation() {
    let fixture = scripted_project();
    fixture.create_file("src/app/Todo.java", "class Todo {\n  // TODO fix\n}\n");

    style_gate!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "✗ FAILED: blocks (style) - 1 violation",
        ))
        .stdout(predicate::str::contains("1 check style errors found."))
        .stdout(predicate::str::contains("Todo.java:2:  // TODO fix"))
        .stdout(predicate::str::contains("3 failed"));
}

#[test]
fn check_fails_on_duplicates() {
    let fixture = scripted_project();
    fixture.create_file("src/app/MainCopy.java", "class MainCopy {}\n");

    style_gate!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "✗ FAILED: cpd (duplicates) - 1 duplicate",
        ))
        .stdout(predicate::str::contains("cpd java 60"))
        .stdout(predicate::str::contains("MainCopy.java"));
}

#[test]
fn check_ignores_module_descriptor_and_other_extensions() {
    let fixture = scripted_project();
    fixture.create_file("src/module-info.java", "// TODO module\n");

    style_gate!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .success();
}

#[test]
fn check_reports_missing_rule_set_without_stopping_other_suites() {
    let fixture = scripted_project();
    std::fs::remove_file(fixture.path().join("rules/naming.xml")).unwrap();

    style_gate!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("! ERROR: naming (style)"))
        .stdout(predicate::str::contains("rule configuration unavailable"))
        .stdout(predicate::str::contains("✓ PASSED: imports (style)"));
}

#[test]
fn check_reports_unrunnable_checker() {
    let fixture = TestFixture::new();
    fixture.create_config(
        r#"
[style]
command = ["/definitely/not/a/checker", "{rules}"]

[style.suites.blocks]
rules = "rules/blocks.xml"

[duplicates]
enabled = false
"#,
    );
    fixture.create_rule_sets();
    fixture.create_java_sources();

    style_gate!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Failed to run `/definitely/not/a/checker`"));
}

#[test]
fn check_empty_source_tree_never_spawns_collaborators() {
    let fixture = TestFixture::new();
    fixture.create_config(
        r#"
[style]
command = ["/definitely/not/a/checker", "{rules}"]

[style.suites.blocks]
rules = "rules/blocks.xml"

[duplicates]
command = ["/definitely/not/a/detector"]
"#,
    );
    fixture.create_rule_sets();
    fixture.create_dir("src");

    style_gate!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(0 files)"));
}

// =============================================================================
// Selection and output
// =============================================================================

#[test]
fn check_runs_only_selected_suites() {
    let fixture = scripted_project();
    fixture.create_file("src/app/MainCopy.java", "class MainCopy {}\n");

    style_gate!()
        .current_dir(fixture.path())
        .args([
            "check",
            "--color",
            "never",
            "--suite",
            "naming",
            "--skip-duplicates",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary: 1 suites, 1 passed"));
}

#[test]
fn check_unknown_suite_is_config_error() {
    let fixture = scripted_project();

    style_gate!()
        .current_dir(fixture.path())
        .args(["check", "--suite", "javadoc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown style suite 'javadoc'"));
}

#[test]
fn check_json_output() {
    let fixture = scripted_project();
    fixture.create_file("src/app/Todo.java", "// TODO\n");

    let output = style_gate!()
        .current_dir(fixture.path())
        .args(["check", "--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["total_files"], 3);
    assert_eq!(value["summary"]["total_suites"], 4);
    assert_eq!(value["summary"]["failed"], 3);
    assert_eq!(value["suites"][3]["status"], "passed");
}

#[test]
fn check_writes_report_file() {
    let fixture = scripted_project();

    style_gate!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never", "-o", "report.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let report = std::fs::read_to_string(fixture.path().join("report.txt")).unwrap();
    assert!(report.contains("4 passed"));
}

#[test]
fn check_verbose_logs_discovery() {
    let fixture = scripted_project();

    style_gate!()
        .current_dir(fixture.path())
        .args(["check", "-v", "--color", "never"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Selecting root as"))
        .stderr(predicate::str::contains("Found 2 .java source files."))
        .stdout(predicate::str::contains("Main.java"));
}

#[test]
fn check_explicit_root_argument() {
    let fixture = scripted_project();
    fixture.create_file("other/Legacy.java", "// TODO legacy\n");

    style_gate!()
        .current_dir(fixture.path())
        .args(["check", "other", "--color", "never", "--skip-duplicates"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("(1 files)"));
}
