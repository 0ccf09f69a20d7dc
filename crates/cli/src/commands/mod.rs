// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod clean;
pub mod init;
pub mod print;

use aliax_config::Aliax;
use anyhow::{Context, Result};
use std::path::Path;

/// Load and validate the config at `path`.
pub fn load(path: &Path) -> Result<Aliax> {
    aliax_config::load_config(path).with_context(|| format!("failed to load {}", path.display()))
}
