//! Placeholder expansion in generated bash scripts

use crate::prelude::*;

#[test]
fn positional_named_and_env_placeholders() {
    if !has_bash() {
        return;
    }
    let temp = Project::init(
        r#"
command:
  show:
    disableHelp: true
    flags:
      - name: tag
        alias: [-t]
        type: string
    match:
      - pattern: tag
        run: |
          echo first={{ $1 }} second={{$2}}
          echo tag={{ .tag }} home={{ $env.SPEC_HOME }}
"#,
    );
    temp.sh("show")
        .args(&["-t", "v1"])
        .env("SPEC_HOME", "/home/spec")
        .passes()
        .stdout_eq("first=-t second=v1\ntag=v1 home=/home/spec\n");
}

#[test]
fn unresolved_placeholder_is_left_verbatim() {
    if !has_bash() {
        return;
    }
    let temp = Project::init(
        r#"
command:
  show:
    disableHelp: true
    match:
      - run: echo '{{.missing}}'
"#,
    );
    temp.sh("show").passes().stdout_eq("{{.missing}}\n");
}
