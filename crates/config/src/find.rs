// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery

use std::path::{Path, PathBuf};

/// File whose contents name the active config.
pub const WORK_FILE: &str = "aliax.work";

/// Config used when nothing else is named.
pub const DEFAULT_CONFIG: &str = "aliax.yaml";

/// Locate the config for a project rooted at `dir`.
///
/// An explicit path wins. Otherwise the first line of `aliax.work` names the
/// config (relative paths resolve against `dir`), falling back to
/// `aliax.yaml` when the work file is absent, unreadable, or blank.
pub fn find_config(dir: &Path, explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return dir.join(path);
    }

    let work = dir.join(WORK_FILE);
    if work.exists() {
        match std::fs::read_to_string(&work) {
            Ok(content) => {
                if let Some(name) = content.lines().map(str::trim).find(|l| !l.is_empty()) {
                    tracing::debug!(config = name, "using config named by work file");
                    return dir.join(name);
                }
            }
            Err(e) => {
                tracing::warn!(path = %work.display(), error = %e, "ignoring unreadable work file");
            }
        }
    }
    dir.join(DEFAULT_CONFIG)
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
