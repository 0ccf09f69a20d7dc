// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `aliax init`: generate every script the config describes.

use crate::env;
use aliax_codegen::{FsStore, Generator};
use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite existing scripts and links
    #[arg(short, long)]
    pub force: bool,

    /// Use `<template dir>/<NAME>.yaml` instead of the project config
    #[arg(short, long, value_name = "NAME")]
    pub template: Option<String>,

    /// Copy the config into the template directory before generating
    #[arg(short, long)]
    pub save: bool,
}

pub fn handle(args: InitArgs, root: &Path, config_path: &Path) -> Result<()> {
    let config_path = match &args.template {
        Some(name) => env::template_dir()?.join(format!("{name}.yaml")),
        None => config_path.to_path_buf(),
    };
    let config = super::load(&config_path)?;

    if args.save {
        let saved = save_template(&config_path)?;
        println!("Saved {} to {}", config_path.display(), saved.display());
    }

    let mut store = FsStore::new(root, args.force);
    let report = Generator::new(&config).generate(&mut store)?;

    println!(
        "Generated {} scripts and {} links in {}",
        report.scripts.len(),
        report.links.len(),
        config.run_path
    );
    Ok(())
}

/// Copy `config_path` into the template directory under its file name.
fn save_template(config_path: &Path) -> Result<PathBuf> {
    let dir = env::template_dir()?;
    let name = config_path
        .file_name()
        .with_context(|| format!("{} has no file name", config_path.display()))?;
    let dest = dir.join(name);

    // Saving a config loaded from the template directory is a no-op.
    if dest == config_path {
        return Ok(dest);
    }
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    std::fs::copy(config_path, &dest).with_context(|| {
        format!(
            "failed to save {} to {}",
            config_path.display(),
            dest.display()
        )
    })?;
    tracing::info!(path = %dest.display(), "saved template");
    Ok(dest)
}
