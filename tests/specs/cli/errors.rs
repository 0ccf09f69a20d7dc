//! CLI error handling specs
//!
//! Verify error messages for missing, malformed, and conflicting input.

use crate::prelude::*;

#[test]
fn missing_config_names_the_file() {
    let temp = Project::empty();
    temp.aliax()
        .args(&["init"])
        .fails()
        .stderr_has("Error: failed to load")
        .stderr_has("aliax.yaml");
}

#[test]
fn unknown_config_extension_is_rejected() {
    let temp = Project::empty();
    temp.file("aliax.ini", "");
    temp.aliax()
        .args(&["--config", "aliax.ini", "init"])
        .fails()
        .stderr_has("aliax.ini");
}

#[test]
fn invalid_pattern_reports_location() {
    let temp = Project::empty();
    temp.file(
        "aliax.yaml",
        r#"
command:
  greet:
    flags:
      - name: name
    match:
      - pattern: nmae
        run: echo
"#,
    );
    temp.aliax()
        .args(&["init"])
        .fails()
        .stderr_has("command.greet.match[0].pattern")
        .stderr_has("unknown flag 'nmae'");
    assert!(!temp.exists("run-scripts"));
}

#[test]
fn declared_help_flag_conflicts_with_injected_help() {
    let temp = Project::empty();
    temp.file(
        "aliax.yaml",
        "command:\n  greet:\n    flags:\n      - name: help\n",
    );
    temp.aliax()
        .args(&["init"])
        .fails()
        .stderr_has("already declares a help flag");
}

#[test]
fn rerun_without_force_refuses_to_overwrite() {
    let temp = Project::init("command:\n  hi:\n    match:\n      - run: echo hi\n");
    temp.aliax()
        .args(&["init"])
        .fails()
        .stderr_has("already exists")
        .stderr_has("--force");
}

#[test]
fn print_unknown_name() {
    let temp = Project::empty();
    temp.file("aliax.yaml", "command:\n  hi: {}\n");
    temp.aliax()
        .args(&["print", "bye"])
        .fails()
        .stderr_has("no extension or command named 'bye'");
}

#[test]
fn alias_with_space_is_rejected_before_writing() {
    let temp = Project::empty();
    temp.file(
        "aliax.yaml",
        "command:\n  t:\n    flags:\n      - name: dry\n        alias: [\"--dry run\", -d]\n",
    );
    temp.aliax()
        .args(&["init"])
        .fails()
        .stderr_has("command.t.flags[0]")
        .stderr_has("alias '--dry run' must not contain whitespace");
    assert!(!temp.exists("run-scripts"));
}

#[test]
fn executable_must_be_a_variable_name() {
    let temp = Project::empty();
    temp.file(
        "aliax.yaml",
        "executable: my-exe\nextend:\n  grep:\n    bin: /usr/bin/grep\n",
    );
    temp.aliax()
        .args(&["init"])
        .fails()
        .stderr_has("'my-exe' is not a valid variable name");
}
