//! `aliax init` specs
//!
//! Verify which files are written and how configs are located.

use crate::prelude::*;

const CONFIG: &str = r#"
extend:
  say:
    bin: echo
command:
  hi:
    match:
      - run: echo hi
"#;

#[test]
fn init_writes_scripts_and_links() {
    let temp = Project::empty();
    temp.file("aliax.yaml", CONFIG);
    temp.aliax()
        .args(&["init"])
        .passes()
        .stdout_eq("Generated 4 scripts and 2 links in run-scripts\n");

    for path in [
        "run-scripts/say.ps1",
        "run-scripts/say.sh",
        "run-scripts/bash/say",
        "run-scripts/hi.ps1",
        "run-scripts/hi.sh",
        "run-scripts/bash/hi",
    ] {
        assert!(temp.exists(path), "{path} should exist");
    }
    assert!(temp
        .read("run-scripts/hi.sh")
        .starts_with("#!/bin/bash\n# Code generated by aliax. DO NOT EDIT.\n"));
}

#[cfg(unix)]
#[test]
fn bash_link_points_at_absolute_script() {
    let temp = Project::init(CONFIG);
    let link = std::fs::read_link(temp.path().join("run-scripts/bash/hi")).unwrap();
    assert!(link.is_absolute(), "{}", link.display());
    assert!(link.ends_with("run-scripts/hi.sh"), "{}", link.display());
}

#[test]
fn force_regenerates_after_config_change() {
    let temp = Project::init(CONFIG);
    temp.file("aliax.yaml", &CONFIG.replace("echo hi", "echo hello"));
    temp.aliax().args(&["init", "--force"]).passes();
    assert!(temp.read("run-scripts/hi.sh").contains("echo hello\n"));
}

#[test]
fn run_path_is_configurable() {
    let temp = Project::empty();
    temp.file("aliax.yaml", &format!("runPath: bin\n{CONFIG}"));
    temp.aliax().args(&["init"]).passes();
    assert!(temp.exists("bin/hi.sh"));
    assert!(temp.exists("bin/bash/hi"));
}

#[test]
fn explicit_toml_config() {
    let temp = Project::empty();
    temp.file(
        "tools.toml",
        r#"
[command.hi]
disableHelp = true

[[command.hi.match]]
run = "echo from toml"
"#,
    );
    temp.aliax()
        .args(&["--config", "tools.toml", "init"])
        .passes();
    assert!(temp.read("run-scripts/hi.sh").contains("echo from toml\n"));
}

#[test]
fn work_file_names_the_config() {
    let temp = Project::empty();
    temp.file("aliax.work", "configs/team.json\n");
    temp.file(
        "configs/team.json",
        r#"{"command": {"hi": {"match": [{"run": "echo from json"}]}}}"#,
    );
    temp.aliax().args(&["init"]).passes();
    assert!(temp.read("run-scripts/hi.ps1").contains("echo from json\n"));
}

#[test]
fn verbose_logs_each_write() {
    let temp = Project::empty();
    temp.file("aliax.yaml", CONFIG);
    temp.aliax()
        .args(&["init", "-v"])
        .passes()
        .stderr_has("wrote script")
        .stderr_has("hi.ps1");
}

#[test]
fn template_replaces_project_config() {
    let temp = Project::empty();
    temp.file(
        ".templates/web.yaml",
        "command:\n  serve:\n    match:\n      - run: echo serving\n",
    );
    temp.aliax()
        .args(&["init", "--template", "web"])
        .passes()
        .stdout_eq("Generated 2 scripts and 1 links in run-scripts\n");
    assert!(temp.read("run-scripts/serve.sh").contains("echo serving\n"));
}

#[test]
fn missing_template_fails() {
    let temp = Project::empty();
    temp.aliax()
        .args(&["init", "-t", "nope"])
        .fails()
        .stderr_has("nope.yaml");
}

#[test]
fn save_copies_config_into_templates() {
    let temp = Project::empty();
    temp.file("aliax.yaml", CONFIG);
    temp.aliax()
        .args(&["init", "--save"])
        .passes()
        .stdout_has("Saved ")
        .stdout_has("Generated 4 scripts and 2 links in run-scripts\n");
    assert_eq!(temp.read(".templates/aliax.yaml"), CONFIG);

    // The saved copy is usable as a template in another project.
    let other = Project::empty();
    other.file(".templates/aliax.yaml", CONFIG);
    other.aliax().args(&["init", "-t", "aliax"]).passes();
    assert!(other.exists("run-scripts/bash/hi"));
}

#[test]
fn saving_a_template_onto_itself_keeps_it() {
    let temp = Project::empty();
    temp.file(".templates/web.yaml", CONFIG);
    temp.aliax().args(&["init", "-t", "web", "-s"]).passes();
    assert_eq!(temp.read(".templates/web.yaml"), CONFIG);
}
