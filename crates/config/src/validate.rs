// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation helpers for config parsing

use crate::command::{identifier, Command, HELP_ALIASES, HELP_FLAG};
use crate::parser::{Aliax, ConfigError};
use aliax_shell::{Platform, ARGS, LOOP_INDEX, NON_MATCHED_ARGS};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

// Command names may contain dashes; they are rewritten when scoped.
#[allow(clippy::expect_used)]
static COMMAND_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_-]*$").expect("constant regex pattern is valid")
});

// Flag names become variables and `{{.name}}` placeholders.
#[allow(clippy::expect_used)]
static FLAG_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("constant regex pattern is valid")
});

// Characters a bash `case` pattern cannot hold unquoted. Regex
// metacharacters are backslash-escaped on output and stay allowed.
const ALIAS_FORBIDDEN: &[char] = &['\'', '"', '`', ';', '<', '>'];

// Names generated scripts assign themselves, plus shell-owned variables that
// are read-only or change how later lines run. Compared case-insensitively
// since PowerShell variables are.
const RESERVED_VARIABLES: &[&str] = &[
    ARGS,
    NON_MATCHED_ARGS,
    LOOP_INDEX,
    "_",
    "true",
    "false",
    "null",
    "host",
    "input",
    "pid",
    "psitem",
    "this",
    "error",
    "home",
    "pwd",
    "path",
    "ifs",
    "uid",
    "euid",
    "ppid",
];

fn invalid(location: impl Into<String>, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidFormat {
        location: location.into(),
        message: message.into(),
    }
}

/// Validate every extension and command tree.
pub(crate) fn validate_commands(config: &Aliax) -> Result<(), ConfigError> {
    for name in config.extend.keys() {
        if config.command.contains_key(name) {
            return Err(invalid(
                format!("command.{name}"),
                "also defined under extend; generated scripts would collide",
            ));
        }
    }
    validate_executable(&config.executable)?;
    for (name, cmd) in &config.extend {
        let location = format!("extend.{name}");
        validate_command(cmd, &location, false)?;
        validate_scoped_names(cmd, &location, false, &config.executable)?;
    }
    for (name, cmd) in &config.command {
        let location = format!("command.{name}");
        validate_command(cmd, &location, cmd.wants_help())?;
        validate_scoped_names(cmd, &location, cmd.wants_help(), &config.executable)?;
    }
    Ok(())
}

/// The executable setting names a variable in every extension script.
fn validate_executable(name: &str) -> Result<(), ConfigError> {
    if !FLAG_NAME.is_match(name) {
        return Err(invalid(
            "executable",
            format!("'{name}' is not a valid variable name"),
        ));
    }
    let reserved = RESERVED_VARIABLES
        .iter()
        .any(|r| r.eq_ignore_ascii_case(name))
        || name.starts_with("temp_args_");
    if reserved {
        return Err(invalid(
            "executable",
            format!("'{name}' is reserved by generated scripts"),
        ));
    }
    Ok(())
}

/// Every node of one script gets a distinct scoped identifier, and every
/// variable it declares is unique across the script.
///
/// `identifier` folds `-` into `_`, so `a-b` and `a` > `b` would otherwise
/// share `root_a_b` even though they are not siblings.
fn validate_scoped_names(
    root: &Command,
    location: &str,
    help_injected: bool,
    executable: &str,
) -> Result<(), ConfigError> {
    let mut nodes: HashMap<String, String> = HashMap::new();
    let mut variables: HashMap<String, String> = HashMap::new();
    variables.insert(executable.to_string(), "executable".to_string());
    collect_scoped_names(
        root,
        &identifier(&root.name),
        location,
        help_injected,
        &mut nodes,
        &mut variables,
    )
}

fn collect_scoped_names(
    cmd: &Command,
    ident: &str,
    location: &str,
    help_injected: bool,
    nodes: &mut HashMap<String, String>,
    variables: &mut HashMap<String, String>,
) -> Result<(), ConfigError> {
    if let Some(other) = nodes.insert(ident.to_string(), location.to_string()) {
        return Err(invalid(
            location,
            format!("scoped name '{ident}' is also used by {other}"),
        ));
    }

    let mut declared: Vec<(String, String)> = cmd
        .flags
        .iter()
        .enumerate()
        .map(|(i, flag)| {
            (
                format!("{ident}_{}", identifier(&flag.name)),
                format!("{location}.flags[{i}]"),
            )
        })
        .collect();
    if help_injected && cmd.get_flag(HELP_FLAG).is_none() {
        declared.push((format!("{ident}_{HELP_FLAG}"), location.to_string()));
    }
    if !cmd.children.is_empty() {
        declared.push((format!("temp_args_{ident}"), location.to_string()));
    }
    for (variable, owner) in declared {
        if let Some(other) = variables.insert(variable.clone(), owner.clone()) {
            return Err(invalid(
                owner,
                format!("variable '{variable}' is also declared by {other}"),
            ));
        }
    }

    for (name, child) in &cmd.children {
        collect_scoped_names(
            child,
            &format!("{ident}_{}", identifier(name)),
            &format!("{location}.command.{name}"),
            false,
            nodes,
            variables,
        )?;
    }
    Ok(())
}

/// Validate one command and its children.
///
/// `help_injected` is true for the root of a pure command that will receive
/// the `help` flag during preload, so patterns may already name it.
fn validate_command(cmd: &Command, location: &str, help_injected: bool) -> Result<(), ConfigError> {
    if !COMMAND_NAME.is_match(&cmd.name) {
        return Err(invalid(
            location,
            format!("invalid command name '{}'", cmd.name),
        ));
    }

    let mut names: HashMap<&str, usize> = HashMap::new();
    let mut tokens: HashMap<String, &str> = HashMap::new();
    if help_injected && cmd.get_flag(HELP_FLAG).is_none() {
        for token in HELP_ALIASES {
            tokens.insert(regex::escape(token), HELP_FLAG);
        }
    }
    for (i, flag) in cmd.flags.iter().enumerate() {
        let flag_location = format!("{location}.flags[{i}]");
        if !FLAG_NAME.is_match(&flag.name) {
            return Err(invalid(
                flag_location,
                format!("invalid flag name '{}'", flag.name),
            ));
        }
        if names.insert(flag.name.as_str(), i).is_some() {
            return Err(invalid(
                flag_location,
                format!("duplicate flag '{}'", flag.name),
            ));
        }
        for token in flag.tokens() {
            if token.trim().is_empty() {
                return Err(invalid(flag_location, "flag alias must not be empty"));
            }
            if token.contains(|c: char| c.is_whitespace() || ALIAS_FORBIDDEN.contains(&c)) {
                return Err(invalid(
                    flag_location,
                    format!("alias '{token}' must not contain whitespace, quotes, or any of ; < >"),
                ));
            }
            if let Some(owner) = tokens.insert(regex::escape(token), flag.name.as_str()) {
                return Err(invalid(
                    flag_location,
                    format!("alias '{token}' already selects flag '{owner}'"),
                ));
            }
        }
    }

    for (i, case) in cmd.cases.iter().enumerate() {
        for name in case.names() {
            let known = names.contains_key(name) || (help_injected && name == HELP_FLAG);
            if !known {
                return Err(invalid(
                    format!("{location}.match[{i}].pattern"),
                    format!(
                        "references unknown flag '{name}'; declared flags: {}",
                        sorted_flag_names(cmd)
                    ),
                ));
            }
        }
    }

    // At most one default may apply to each platform.
    let defaults: Vec<(usize, Option<Platform>)> = cmd
        .cases
        .iter()
        .enumerate()
        .filter(|(_, case)| case.is_default())
        .map(|(i, case)| (i, case.platform))
        .collect();
    for (n, (i, platform)) in defaults.iter().enumerate() {
        let overlap = defaults[..n]
            .iter()
            .find(|(_, earlier)| earlier.is_none() || platform.is_none() || earlier == platform);
        if let Some((first, _)) = overlap {
            return Err(invalid(
                format!("{location}.match[{i}]"),
                format!("second default case; match[{first}] already applies"),
            ));
        }
    }

    let mut idents: HashMap<String, &str> = HashMap::new();
    for (name, child) in &cmd.children {
        let child_location = format!("{location}.command.{name}");
        if let Some(other) = idents.insert(identifier(name), name.as_str()) {
            return Err(invalid(
                child_location,
                format!("collides with sibling '{other}'"),
            ));
        }
        validate_command(child, &child_location, false)?;
    }
    Ok(())
}

fn sorted_flag_names(cmd: &Command) -> String {
    let mut names: Vec<&str> = cmd.flags.iter().map(|f| f.name.as_str()).collect();
    if names.is_empty() {
        return "(none)".to_string();
    }
    names.sort_unstable();
    names.join(", ")
}
