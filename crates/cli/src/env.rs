// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Directory name next to the executable holding saved configs.
const TEMPLATE_DIR: &str = "template";

/// Resolve the template directory: ALIAX_TEMPLATE_DIR > <exe dir>/template
pub fn template_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("ALIAX_TEMPLATE_DIR").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let exe = std::env::current_exe().context("failed to locate the aliax executable")?;
    let dir = exe
        .parent()
        .context("aliax executable has no parent directory")?;
    Ok(dir.join(TEMPLATE_DIR))
}
