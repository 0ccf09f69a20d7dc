// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ScriptStore, StoreError};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

const ROOT: &str = "/project";

/// Recorded store operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Write { path: PathBuf },
    Link { target: PathBuf, link: PathBuf },
    Remove { path: PathBuf },
}

/// In-memory store rooted at `/project`
#[derive(Debug, Clone, Default)]
pub struct FakeStore {
    force: bool,
    files: IndexMap<PathBuf, String>,
    links: IndexMap<PathBuf, PathBuf>,
    calls: Vec<StoreCall>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_force(mut self) -> Self {
        self.force = true;
        self
    }

    /// Contents of a written file
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// Target of a created link
    pub fn link_target(&self, link: impl AsRef<Path>) -> Option<&Path> {
        self.links.get(link.as_ref()).map(PathBuf::as_path)
    }

    /// Paths of all written files, in write order
    pub fn files(&self) -> Vec<&Path> {
        self.files.keys().map(PathBuf::as_path).collect()
    }

    /// Get all recorded operations
    pub fn calls(&self) -> &[StoreCall] {
        &self.calls
    }
}

impl ScriptStore for FakeStore {
    fn write(&mut self, path: &Path, contents: &str) -> Result<(), StoreError> {
        self.calls.push(StoreCall::Write {
            path: path.to_path_buf(),
        });
        if self.files.contains_key(path) && !self.force {
            return Err(StoreError::Exists(self.locate(path)));
        }
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn link(&mut self, target: &Path, link: &Path) -> Result<(), StoreError> {
        self.calls.push(StoreCall::Link {
            target: target.to_path_buf(),
            link: link.to_path_buf(),
        });
        if self.links.contains_key(link) && !self.force {
            return Err(StoreError::Exists(self.locate(link)));
        }
        self.links.insert(link.to_path_buf(), target.to_path_buf());
        Ok(())
    }

    fn locate(&self, path: &Path) -> PathBuf {
        Path::new(ROOT).join(path)
    }

    fn entries(&self, dir: &Path) -> Result<Vec<PathBuf>, StoreError> {
        let mut found: Vec<PathBuf> = self
            .files
            .keys()
            .chain(self.links.keys())
            .filter(|path| path.starts_with(dir))
            .cloned()
            .collect();
        found.sort();
        Ok(found)
    }

    fn remove(&mut self, path: &Path) -> Result<(), StoreError> {
        self.calls.push(StoreCall::Remove {
            path: path.to_path_buf(),
        });
        let file = self.files.shift_remove(path);
        let link = self.links.shift_remove(path);
        if file.is_none() && link.is_none() {
            return Err(StoreError::Io {
                path: self.locate(path),
                source: std::io::ErrorKind::NotFound.into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
