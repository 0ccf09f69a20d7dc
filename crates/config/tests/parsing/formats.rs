// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-format parsing tests: every format describes the same tree.

use super::*;
use aliax_config::{FlagKind, Pattern};
use similar_asserts::assert_eq;

fn assert_sample(config: &Aliax) {
    assert_eq!(config.run_path, "scripts");
    assert_eq!(config.executable, "executable");

    let git = &config.extend["git"];
    assert_eq!(git.name, "git");
    assert_eq!(git.bin.as_deref(), Some("/usr/bin/git"));
    assert_eq!(git.flags[0].tokens(), vec!["-q"]);
    assert_eq!(git.flags[0].kind, FlagKind::Bool);

    let greet = &config.command["greet"];
    assert_eq!(greet.short, "Say hello");
    assert_eq!(greet.flags[0].kind, FlagKind::String);
    assert_eq!(greet.flags[0].alias, vec!["-n", "--name"]);
    assert_eq!(greet.cases.len(), 2);
    assert_eq!(greet.cases[0].pattern, Some(Pattern::One("name".into())));
    assert_eq!(greet.cases[0].run, "echo hello {{.name}}");
    assert!(greet.cases[1].is_default());

    let loud = &greet.children["loud"];
    assert_eq!(loud.name, "loud");
    assert!(loud.disable_help);
    assert!(loud.cases[0].is_default());
    assert_eq!(loud.cases[0].run, "echo HELLO");
}

#[yare::parameterized(
    yaml = { "sample.yaml", Format::Yaml },
    toml = { "sample.toml", Format::Toml },
    json = { "sample.json", Format::Json },
    hcl  = { "sample.hcl", Format::Hcl },
)]
fn sample_parses_identically(file: &str, format: Format) {
    let content = std::fs::read_to_string(fixture(file)).unwrap();
    assert_sample(&parse(&content, format));
}

#[test]
fn formats_agree() {
    let read = |file: &str| std::fs::read_to_string(fixture(file)).unwrap();
    let yaml = parse(&read("sample.yaml"), Format::Yaml);
    assert_eq!(yaml, parse(&read("sample.toml"), Format::Toml));
    assert_eq!(yaml, parse(&read("sample.json"), Format::Json));
    assert_eq!(yaml, parse(&read("sample.hcl"), Format::Hcl));
}

#[test]
fn toml_error_is_wrapped() {
    let err = parse_config_with_format("runPath = ", Format::Toml).unwrap_err();
    assert_err_contains(&err, &["TOML parse error"]);
}

#[test]
fn json_error_is_wrapped() {
    let err = parse_config_with_format("{\"command\": ", Format::Json).unwrap_err();
    assert_err_contains(&err, &["JSON parse error"]);
}

#[test]
fn hcl_validation_uses_same_locations() {
    let err = parse_config_with_format(
        r#"
command "greet" {
  match = [{ pattern = "nope", run = "echo" }]
}
"#,
        Format::Hcl,
    )
    .unwrap_err();
    assert_err_contains(&err, &["command.greet.match[0].pattern", "unknown flag 'nope'"]);
}
