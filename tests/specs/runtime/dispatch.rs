//! Match dispatch in generated bash scripts
//!
//! Precedence, default fallback, and help output, observed by running the
//! scripts `aliax init` writes.

use crate::prelude::*;

const GREET: &str = r#"
command:
  greet:
    short: Say hello
    flags:
      - name: name
        alias: [-n, --name]
        type: string
        usage: who to greet
      - name: loud
        alias: [--loud]
    match:
      - pattern: name
        run: echo hello {{.name}}
      - pattern: [name, loud]
        run: echo HELLO {{.name}}
      - pattern: _
        run: echo hello stranger
"#;

#[test]
fn string_flag_selects_its_case() {
    if !has_bash() {
        return;
    }
    let temp = Project::init(GREET);
    temp.sh("greet")
        .args(&["-n", "Bob"])
        .passes()
        .stdout_eq("hello Bob\n");
    temp.sh("greet")
        .args(&["--name", "Ann"])
        .passes()
        .stdout_eq("hello Ann\n");
}

#[test]
fn more_specific_case_wins() {
    if !has_bash() {
        return;
    }
    let temp = Project::init(GREET);
    temp.sh("greet")
        .args(&["--loud", "-n", "Bob"])
        .passes()
        .stdout_eq("HELLO Bob\n");
}

#[test]
fn default_runs_when_nothing_matches() {
    if !has_bash() {
        return;
    }
    let temp = Project::init(GREET);
    temp.sh("greet").passes().stdout_eq("hello stranger\n");
    temp.sh("greet")
        .args(&["--loud"])
        .passes()
        .stdout_eq("hello stranger\n");
}

#[test]
fn help_flag_prints_usage() {
    if !has_bash() {
        return;
    }
    let temp = Project::init(GREET);
    temp.sh("greet").args(&["-h"]).passes().stdout_eq(
        "\
Say hello

Usage:
  greet [flags]

Flags:
  -n, --name   who to greet
  --loud
  -h, --help   help for greet
",
    );
}

#[test]
fn command_without_cases_prints_help() {
    if !has_bash() {
        return;
    }
    let temp = Project::init("command:\n  tool:\n    short: Project tasks\n");
    temp.sh("tool")
        .passes()
        .stdout_eq("Project tasks\n\nUsage:\n  tool [flags]\n\nFlags:\n  -h, --help   help for tool\n");
}

#[test]
fn alias_with_regex_metacharacters_matches_literally() {
    if !has_bash() {
        return;
    }
    let temp = Project::init(
        r#"
command:
  build:
    disableHelp: true
    flags:
      - name: plus
        alias: [-j+]
      - name: dotted
        alias: [--dry.run]
    match:
      - pattern: plus
        run: echo plus
      - pattern: dotted
        run: echo dotted
      - run: echo neither
"#,
    );
    temp.sh("build").args(&["-j+"]).passes().stdout_eq("plus\n");
    temp.sh("build")
        .args(&["--dry.run"])
        .passes()
        .stdout_eq("dotted\n");
    temp.sh("build")
        .args(&["--dryXrun"])
        .passes()
        .stdout_eq("neither\n");
}

#[test]
fn punctuated_aliases_keep_the_script_parseable() {
    if !has_bash() {
        return;
    }
    let temp = Project::init(
        r#"
command:
  t:
    disableHelp: true
    flags:
      - name: pipe
        alias: ["--a|b", "-(x)", "-&"]
      - name: misc
        alias: ["-$", "-*", "-?", "-[x]", "-{x}", "-#", "-~", "-!", "-%", "-@", "--k=v", "-a,b", "-a:b", "-a/b"]
    match:
      - pattern: pipe
        run: echo pipe
      - pattern: misc
        run: echo misc
      - run: echo neither
"#,
    );
    let script = temp.path().join("run-scripts/t.sh");
    let check = std::process::Command::new("bash")
        .arg("-n")
        .arg(&script)
        .output()
        .unwrap();
    assert!(
        check.status.success(),
        "bash -n failed: {}\n{}",
        String::from_utf8_lossy(&check.stderr),
        temp.read("run-scripts/t.sh")
    );

    temp.sh("t").args(&["--a|b"]).passes().stdout_eq("pipe\n");
    temp.sh("t").args(&["-&"]).passes().stdout_eq("pipe\n");
    temp.sh("t").args(&["-[x]"]).passes().stdout_eq("misc\n");
    temp.sh("t").args(&["--k=v"]).passes().stdout_eq("misc\n");
    temp.sh("t").args(&["-a"]).passes().stdout_eq("neither\n");
    temp.sh("t").args(&["-x"]).passes().stdout_eq("neither\n");
}

#[cfg(unix)]
#[test]
fn link_is_directly_executable() {
    if !has_bash() || !std::path::Path::new("/bin/bash").exists() {
        return;
    }
    let temp = Project::init(GREET);
    let link = temp.path().join("run-scripts/bash/greet");
    let output = std::process::Command::new(link)
        .args(["-n", "Bob"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "hello Bob\n");
}
