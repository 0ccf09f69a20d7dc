// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `aliax clean`: remove generated scripts and links.

use aliax_codegen::{FsStore, Generator};
use anyhow::Result;
use std::path::Path;

pub fn handle(root: &Path, config_path: &Path) -> Result<()> {
    let config = super::load(config_path)?;
    let mut store = FsStore::new(root, false);
    let removed = Generator::new(&config).clean(&mut store)?;

    if removed.is_empty() {
        eprintln!("Nothing to clean in {}", config.run_path);
        return Ok(());
    }
    println!("Removed {} files from {}", removed.len(), config.run_path);
    Ok(())
}
