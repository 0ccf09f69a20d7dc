//! `aliax clean` specs

use crate::prelude::*;

const CONFIG: &str = "command:\n  hi:\n    match:\n      - run: echo hi\n";

#[test]
fn clean_removes_generated_files_only() {
    let temp = Project::init(CONFIG);
    temp.file("run-scripts/notes.txt", "keep me");

    temp.aliax()
        .args(&["clean"])
        .passes()
        .stdout_eq("Removed 3 files from run-scripts\n");

    assert!(!temp.exists("run-scripts/hi.sh"));
    assert!(!temp.exists("run-scripts/hi.ps1"));
    assert!(!temp.exists("run-scripts/bash/hi"));
    assert_eq!(temp.read("run-scripts/notes.txt"), "keep me");
}

#[test]
fn clean_twice_reports_nothing() {
    let temp = Project::init(CONFIG);
    temp.aliax().args(&["clean"]).passes();
    temp.aliax()
        .args(&["clean"])
        .passes()
        .stderr_has("Nothing to clean in run-scripts");
}

#[test]
fn init_after_clean_needs_no_force() {
    let temp = Project::init(CONFIG);
    temp.aliax().args(&["clean"]).passes();
    temp.aliax().args(&["init"]).passes();
    assert!(temp.exists("run-scripts/bash/hi"));
}
