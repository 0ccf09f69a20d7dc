//! Extension wrappers in generated bash scripts
//!
//! Unhandled arguments reach the wrapped executable.

use crate::prelude::*;

#[test]
fn bare_extension_forwards_everything() {
    if !has_bash() {
        return;
    }
    let temp = Project::init("extend:\n  say:\n    bin: echo\n");
    temp.sh("say")
        .args(&["-n", "a", "b c"])
        .passes()
        .stdout_eq("a b c");
}

#[test]
fn declared_flags_are_stripped_before_forwarding() {
    if !has_bash() {
        return;
    }
    let temp = Project::init(
        r#"
extend:
  say:
    bin: echo
    flags:
      - name: quiet
        alias: [-q]
    command:
      hi:
        match:
          - run: echo hi there
"#,
    );
    temp.sh("say")
        .args(&["a", "-q", "b"])
        .passes()
        .stdout_eq("a b\n");
    temp.sh("say").args(&["hi"]).passes().stdout_eq("hi there\n");
}

#[test]
fn extension_case_short_circuits_forwarding() {
    if !has_bash() {
        return;
    }
    let temp = Project::init(
        r#"
extend:
  say:
    bin: echo
    flags:
      - name: shout
        alias: [--shout]
    match:
      - pattern: shout
        run: echo LOUD
"#,
    );
    temp.sh("say")
        .args(&["--shout", "x"])
        .passes()
        .stdout_eq("LOUD\n");
    temp.sh("say").args(&["x"]).passes().stdout_eq("x\n");
}
