// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Config parsing (YAML, TOML, JSON, and HCL)

use crate::command::Command;
use crate::validate::validate_commands;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default directory for generated scripts.
pub const DEFAULT_RUN_PATH: &str = "run-scripts";

/// Default name of the variable holding a wrapped executable's path.
pub const DEFAULT_EXECUTABLE: &str = "executable";

/// Config file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Toml,
    Json,
    Hcl,
}

impl Format {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Option<Format> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            "json" => Some(Format::Json),
            "hcl" => Some(Format::Hcl),
            _ => None,
        }
    }
}

/// Errors that can occur while loading a config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HCL parse error: {0}")]
    Hcl(#[from] hcl::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid format for {location}: {message}")]
    InvalidFormat { location: String, message: String },

    #[error("command '{0}' already declares a help flag; set disableHelp or rename the flag")]
    HelpFlagExists(String),

    #[error("unsupported config format: {}", .0.display())]
    UnknownFormat(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn default_run_path() -> String {
    DEFAULT_RUN_PATH.to_string()
}

fn default_executable() -> String {
    DEFAULT_EXECUTABLE.to_string()
}

/// A parsed config document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aliax {
    /// Output directory for generated scripts.
    #[serde(default = "default_run_path", alias = "run_path")]
    pub run_path: String,
    /// Variable name that holds a wrapped executable's path.
    #[serde(default = "default_executable")]
    pub executable: String,
    /// Wrappers around existing executables.
    #[serde(default, alias = "extension", alias = "extensions")]
    pub extend: IndexMap<String, Command>,
    /// Pure dispatch commands.
    #[serde(default, alias = "commands")]
    pub command: IndexMap<String, Command>,
}

impl Default for Aliax {
    fn default() -> Self {
        Self {
            run_path: default_run_path(),
            executable: default_executable(),
            extend: IndexMap::new(),
            command: IndexMap::new(),
        }
    }
}

impl Aliax {
    pub fn get_command(&self, name: &str) -> Option<&Command> {
        self.command.get(name)
    }

    pub fn get_extension(&self, name: &str) -> Option<&Command> {
        self.extend.get(name)
    }
}

/// Parse a config from YAML content (convenience wrapper)
pub fn parse_config(content: &str) -> Result<Aliax, ConfigError> {
    parse_config_with_format(content, Format::Yaml)
}

/// Parse a config from the given content in the specified format
pub fn parse_config_with_format(content: &str, format: Format) -> Result<Aliax, ConfigError> {
    // 1. Serde does the heavy lifting
    let mut config: Aliax = match format {
        Format::Yaml => serde_yaml::from_str(content)?,
        Format::Toml => toml::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
        Format::Hcl => hcl::from_str(content)?,
    };

    // 2. Name fixup: inject map keys into .name fields
    for (name, cmd) in config.extend.iter_mut().chain(config.command.iter_mut()) {
        fix_names(name, cmd);
    }

    // 3. Validation
    if config.run_path.trim().is_empty() {
        return Err(ConfigError::InvalidFormat {
            location: "runPath".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    validate_commands(&config)?;

    tracing::debug!(
        extensions = config.extend.len(),
        commands = config.command.len(),
        "parsed config"
    );
    Ok(config)
}

fn fix_names(name: &str, cmd: &mut Command) {
    cmd.name = name.to_string();
    for (child_name, child) in &mut cmd.children {
        fix_names(child_name, child);
    }
}

/// Read and parse a config file, picking the format from its extension.
pub fn load_config(path: &Path) -> Result<Aliax, ConfigError> {
    let format = Format::from_path(path).ok_or_else(|| ConfigError::UnknownFormat(path.into()))?;
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.into(),
        source,
    })?;
    tracing::debug!(path = %path.display(), ?format, "loading config");
    parse_config_with_format(&content, format)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
