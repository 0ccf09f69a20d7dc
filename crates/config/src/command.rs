// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command tree definitions

use crate::parser::ConfigError;
use aliax_shell::{FlagKind, Platform};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Name of the flag injected into pure commands.
pub const HELP_FLAG: &str = "help";

/// Tokens that select the injected help flag.
pub const HELP_ALIASES: [&str; 2] = ["-h", "--help"];

/// Pattern token that marks the fallback case.
pub const DEFAULT_PATTERN: &str = "_";

/// Shell-safe variable segment for a command or flag name (`-` becomes `_`).
pub fn identifier(name: &str) -> String {
    name.replace('-', "_")
}

/// A declared flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    pub name: String,
    #[serde(default, alias = "aliases")]
    pub alias: Vec<String>,
    #[serde(default, rename = "type")]
    pub kind: FlagKind,
    #[serde(default)]
    pub usage: String,
}

impl Flag {
    /// Literal tokens that select this flag on the command line.
    ///
    /// A flag without aliases is selected by its bare name.
    pub fn tokens(&self) -> Vec<&str> {
        if self.alias.is_empty() {
            vec![self.name.as_str()]
        } else {
            self.alias.iter().map(String::as_str).collect()
        }
    }
}

/// Flag names a match case requires.
///
/// Accepts either a single name or a list of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pattern {
    One(String),
    Many(Vec<String>),
}

/// One rule of a command's dispatch table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub run: String,
}

impl MatchCase {
    /// Flag names that must all be set for this case to fire.
    ///
    /// Empty for the default case.
    pub fn names(&self) -> Vec<&str> {
        let names: Vec<&str> = match &self.pattern {
            None => Vec::new(),
            Some(Pattern::One(name)) => vec![name.as_str()],
            Some(Pattern::Many(names)) => names.iter().map(String::as_str).collect(),
        };
        names
            .into_iter()
            .filter(|name| !name.is_empty() && *name != DEFAULT_PATTERN)
            .collect()
    }

    /// True when the pattern is absent, empty, or `_`.
    pub fn is_default(&self) -> bool {
        self.names().is_empty()
    }

    /// True when the case applies to scripts for `platform`.
    pub fn applies_to(&self, platform: Platform) -> bool {
        !matches!(self.platform, Some(p) if p != platform)
    }
}

/// A command or extension definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    /// Map key; set by the parser.
    #[serde(skip)]
    pub name: String,
    /// Space-joined path from the root (`tool build`); set by [`Command::preload`].
    #[serde(skip)]
    pub display_name: String,
    #[serde(default, alias = "disable_help")]
    pub disable_help: bool,
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub long: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub flags: Vec<Flag>,
    #[serde(default, rename = "match")]
    pub cases: Vec<MatchCase>,
    #[serde(default, rename = "command", alias = "commands")]
    pub children: IndexMap<String, Command>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin: Option<String>,
}

impl Command {
    pub fn get_flag(&self, name: &str) -> Option<&Flag> {
        self.flags.iter().find(|f| f.name == name)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// True when the root of a pure command will carry an injected help flag.
    pub fn wants_help(&self) -> bool {
        !self.disable_help
    }

    /// Prepare a root command for generation.
    ///
    /// Records display names down the tree and, unless help is disabled,
    /// appends the `help` flag. Fails if a `help` flag is already declared.
    pub fn preload(&mut self, name: &str) -> Result<(), ConfigError> {
        self.name = name.to_string();
        self.set_display_name(name);
        if self.disable_help {
            return Ok(());
        }
        if self.get_flag(HELP_FLAG).is_some() {
            return Err(ConfigError::HelpFlagExists(name.to_string()));
        }
        self.flags.push(Flag {
            name: HELP_FLAG.to_string(),
            alias: HELP_ALIASES.iter().map(|a| a.to_string()).collect(),
            kind: FlagKind::Bool,
            usage: format!("help for {name}"),
        });
        Ok(())
    }

    /// Record display names without touching flags (extensions).
    pub fn set_display_name(&mut self, display: &str) {
        self.display_name = display.to_string();
        for (name, child) in &mut self.children {
            child.set_display_name(&format!("{display} {name}"));
        }
    }

    /// Usage text printed by the generated help branch.
    pub fn help_text(&self) -> String {
        let display = if self.display_name.is_empty() {
            self.name.as_str()
        } else {
            self.display_name.as_str()
        };
        let mut sections: Vec<String> = Vec::new();

        let about = if self.long.is_empty() { &self.short } else { &self.long };
        if !about.is_empty() {
            sections.push(about.trim_end().to_string());
        }

        let mut usage = format!("Usage:\n  {display}");
        if self.has_children() {
            usage.push_str(" [command]");
        }
        if !self.flags.is_empty() {
            usage.push_str(" [flags]");
        }
        sections.push(usage);

        if !self.example.is_empty() {
            sections.push(format!("Example:\n{}", self.example.trim_end()));
        }

        if self.has_children() {
            let rows = self
                .children
                .iter()
                .map(|(name, child)| (name.clone(), child.short.clone()))
                .collect::<Vec<_>>();
            sections.push(format!("Available Commands:\n{}", table(&rows)));
        }

        if !self.flags.is_empty() {
            let rows = self
                .flags
                .iter()
                .map(|flag| (flag.tokens().join(", "), flag.usage.clone()))
                .collect::<Vec<_>>();
            sections.push(format!("Flags:\n{}", table(&rows)));
        }

        sections.join("\n\n")
    }
}

/// Two-column listing with the left column padded to a common width.
fn table(rows: &[(String, String)]) -> String {
    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (i, (left, right)) in rows.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if right.is_empty() {
            let _ = write!(out, "  {left}");
        } else {
            let _ = write!(out, "  {left:<width$}   {right}");
        }
    }
    out
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
