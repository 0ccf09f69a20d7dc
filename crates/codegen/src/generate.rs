// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script generation for a whole configuration.
//!
//! Every extension and command yields `<runPath>/<name>.ps1` and
//! `<runPath>/<name>.sh`, plus a link `<runPath>/bash/<name>` pointing at the
//! bash script so the directory can be put on `PATH`.

use crate::builder::{Mode, ScriptBuilder};
use crate::resolver::Resolvers;
use crate::store::{ScriptStore, StoreError};
use aliax_config::{Aliax, Command, ConfigError, Platform};
use aliax_shell::{Bash, PowerShell, Target};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory below `runPath` holding extension-less bash links.
pub const LINK_DIR: &str = "bash";

/// Errors that can occur while generating scripts
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("'{command}' matches on undeclared flag '{flag}'")]
    UnknownFlag { command: String, flag: String },
    #[error("executable '{name}' not found on PATH; set `bin` for this extension")]
    ExecutableNotFound {
        name: String,
        #[source]
        source: which::Error,
    },
    #[error("no extension or command named '{0}'")]
    UnknownName(String),
}

/// Files produced by one generation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub scripts: Vec<PathBuf>,
    pub links: Vec<PathBuf>,
}

/// Where an extension's executable comes from.
enum Bin {
    /// `bin` from the config; may contain `{{ $env.VAR }}`.
    Configured(String),
    /// Found on `PATH` at generation time.
    Located(PathBuf),
}

/// Generates every script a configuration describes.
pub struct Generator<'a> {
    config: &'a Aliax,
    resolvers: Resolvers,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Aliax) -> Self {
        Self {
            config,
            resolvers: Resolvers::new(),
        }
    }

    /// Write all scripts and links. Extensions are generated before commands.
    pub fn generate(&self, store: &mut impl ScriptStore) -> Result<Report, GenerateError> {
        let mut report = Report::default();

        for name in self.config.extend.keys() {
            let (ps1, sh) = self.scripts(name)?;
            self.emit(store, name, &ps1, &sh, &mut report)?;
        }
        for name in self.config.command.keys() {
            let (ps1, sh) = self.scripts(name)?;
            self.emit(store, name, &ps1, &sh, &mut report)?;
        }

        tracing::info!(
            scripts = report.scripts.len(),
            links = report.links.len(),
            "generation complete"
        );
        Ok(report)
    }

    /// Render a single script without writing it.
    pub fn render(&self, name: &str, platform: Platform) -> Result<String, GenerateError> {
        match platform {
            Platform::Bash => self.render_for(&Bash, name),
            Platform::PowerShell => self.render_for(&PowerShell, name),
        }
    }

    /// Remove generated scripts and bash links below the run path.
    ///
    /// Other files under the run path are left alone.
    pub fn clean(&self, store: &mut impl ScriptStore) -> Result<Vec<PathBuf>, GenerateError> {
        let mut removed = Vec::new();
        for path in store.entries(Path::new(&self.config.run_path))? {
            if !is_generated(&path) {
                continue;
            }
            store.remove(&path)?;
            tracing::info!(path = %path.display(), "removed");
            removed.push(path);
        }
        Ok(removed)
    }

    /// PowerShell and bash scripts for one extension or command.
    fn scripts(&self, name: &str) -> Result<(String, String), GenerateError> {
        Ok((
            self.render_for(&PowerShell, name)?,
            self.render_for(&Bash, name)?,
        ))
    }

    fn render_for<T: Target>(&self, target: &T, name: &str) -> Result<String, GenerateError> {
        let builder = ScriptBuilder::new(target, &self.resolvers, &self.config.executable);

        if let Some(ext) = self.config.get_extension(name) {
            let mut ext = ext.clone();
            ext.set_display_name(name);
            let bin = match locate_bin(name, ext.bin.as_deref())? {
                Bin::Configured(bin) => self.resolvers.resolve_env(target, &bin),
                Bin::Located(path) => path.display().to_string(),
            };
            return builder.build(&ext, Mode::Extension { bin: &bin });
        }

        let cmd = self
            .config
            .get_command(name)
            .ok_or_else(|| GenerateError::UnknownName(name.to_string()))?;
        let mut cmd: Command = cmd.clone();
        cmd.preload(name)?;
        builder.build(&cmd, Mode::Command)
    }

    fn emit(
        &self,
        store: &mut impl ScriptStore,
        name: &str,
        ps1: &str,
        sh: &str,
        report: &mut Report,
    ) -> Result<(), GenerateError> {
        let run_path = Path::new(&self.config.run_path);

        let ps1_path = run_path.join(format!("{name}.{}", Platform::PowerShell.extension()));
        store.write(&ps1_path, ps1)?;
        tracing::info!(path = %ps1_path.display(), "wrote script");
        report.scripts.push(ps1_path);

        let sh_path = run_path.join(format!("{name}.{}", Platform::Bash.extension()));
        store.write(&sh_path, sh)?;
        tracing::info!(path = %sh_path.display(), "wrote script");

        let link = run_path.join(LINK_DIR).join(name);
        let target = store.locate(&sh_path);
        store.link(&target, &link)?;
        tracing::debug!(link = %link.display(), "linked script");
        report.scripts.push(sh_path);
        report.links.push(link);
        Ok(())
    }
}

fn is_generated(path: &Path) -> bool {
    let script = path.extension().is_some_and(|ext| {
        ext == Platform::Bash.extension() || ext == Platform::PowerShell.extension()
    });
    let linked = path
        .parent()
        .and_then(Path::file_name)
        .is_some_and(|dir| dir == LINK_DIR);
    script || linked
}

fn locate_bin(name: &str, configured: Option<&str>) -> Result<Bin, GenerateError> {
    if let Some(bin) = configured {
        return Ok(Bin::Configured(bin.to_string()));
    }
    let path = which::which(name).map_err(|source| GenerateError::ExecutableNotFound {
        name: name.to_string(),
        source,
    })?;
    tracing::debug!(name, path = %path.display(), "located executable");
    Ok(Bin::Located(path))
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
