// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Destinations for generated scripts

mod fs;

pub use fs::FsStore;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeStore, StoreCall};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{} already exists; rerun with --force to overwrite", .0.display())]
    Exists(PathBuf),
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where scripts and their links are written.
///
/// Paths are relative to the store's root.
pub trait ScriptStore {
    /// Write a script, creating parent directories.
    fn write(&mut self, path: &Path, contents: &str) -> Result<(), StoreError>;

    /// Create `link` pointing at the absolute `target`.
    fn link(&mut self, target: &Path, link: &Path) -> Result<(), StoreError>;

    /// Absolute location of `path` inside the store.
    fn locate(&self, path: &Path) -> PathBuf;

    /// Files and links below `dir`, recursively, without following links.
    /// A missing `dir` has no entries.
    fn entries(&self, dir: &Path) -> Result<Vec<PathBuf>, StoreError>;

    /// Remove a single file or link.
    fn remove(&mut self, path: &Path) -> Result<(), StoreError>;
}
