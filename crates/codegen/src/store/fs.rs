// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem-backed store

use super::{ScriptStore, StoreError};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Writes scripts below a root directory.
///
/// Existing files and links are only replaced when `force` is set.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
    force: bool,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>, force: bool) -> Self {
        Self {
            root: root.into(),
            force,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn ensure_parent(path: &Path) -> Result<(), StoreError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(io_error(parent))
        }
        _ => Ok(()),
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(io_error(path))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

impl ScriptStore for FsStore {
    fn write(&mut self, path: &Path, contents: &str) -> Result<(), StoreError> {
        let full = self.root.join(path);
        ensure_parent(&full)?;

        let mut options = OpenOptions::new();
        options.write(true);
        if self.force {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }
        let mut file = options.open(&full).map_err(|source| {
            if source.kind() == ErrorKind::AlreadyExists {
                StoreError::Exists(full.clone())
            } else {
                io_error(&full)(source)
            }
        })?;
        file.write_all(contents.as_bytes())
            .map_err(io_error(&full))?;

        if full.extension().is_some_and(|ext| ext == "sh") {
            make_executable(&full)?;
        }
        Ok(())
    }

    fn link(&mut self, target: &Path, link: &Path) -> Result<(), StoreError> {
        let full = self.root.join(link);
        ensure_parent(&full)?;
        if fs::symlink_metadata(&full).is_ok() {
            if !self.force {
                return Err(StoreError::Exists(full));
            }
            fs::remove_file(&full).map_err(io_error(&full))?;
        }
        symlink(target, &full).map_err(io_error(&full))
    }

    fn locate(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    fn entries(&self, dir: &Path) -> Result<Vec<PathBuf>, StoreError> {
        let mut found = Vec::new();
        let mut pending = vec![dir.to_path_buf()];
        while let Some(next) = pending.pop() {
            let full = self.root.join(&next);
            let listing = match fs::read_dir(&full) {
                Ok(listing) => listing,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(io_error(&full)(e)),
            };
            for entry in listing {
                let entry = entry.map_err(io_error(&full))?;
                let path = next.join(entry.file_name());
                let kind = entry.file_type().map_err(io_error(&full))?;
                if kind.is_dir() {
                    pending.push(path);
                } else {
                    found.push(path);
                }
            }
        }
        found.sort();
        Ok(found)
    }

    fn remove(&mut self, path: &Path) -> Result<(), StoreError> {
        let full = self.root.join(path);
        fs::remove_file(&full).map_err(io_error(&full))
    }
}

#[cfg(test)]
#[path = "fs_tests.rs"]
mod tests;
