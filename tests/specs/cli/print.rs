//! `aliax print` specs
//!
//! Exact script output for a minimal command.

use crate::prelude::*;

const CONFIG: &str = r#"
command:
  hi:
    disableHelp: true
    match:
      - run: echo hi
"#;

#[test]
fn print_bash_by_default() {
    let temp = Project::empty();
    temp.file("aliax.yaml", CONFIG);
    temp.aliax().args(&["print", "hi"]).passes().stdout_eq(
        r#"#!/bin/bash
# Code generated by aliax. DO NOT EDIT.
set -e
args=("$@")
non_matched_args=()
echo hi
exit
"#,
    );
    assert!(!temp.exists("run-scripts"));
}

#[test]
fn print_powershell() {
    let temp = Project::empty();
    temp.file("aliax.yaml", CONFIG);
    temp.aliax()
        .args(&["print", "hi", "--target", "powershell"])
        .passes()
        .stdout_eq(
            r#"# Code generated by aliax. DO NOT EDIT.
$non_matched_args = @()
echo hi
exit
"#,
        );
}
