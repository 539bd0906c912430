// src/fs/mod.rs

//! Filesystem seam used by the config loader and the directory scanner.

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};
use tracing::trace;

pub mod mock;

/// What kind of entry a path points at. Symlinks are not followed and show
/// up as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Other,
}

/// The subset of file metadata the watcher cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMeta {
    pub kind: EntryKind,
    pub modified: SystemTime,
}

/// Abstract filesystem interface.
pub trait FileSystem: Send + Sync + Debug {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn exists(&self, path: &Path) -> bool;
    fn metadata(&self, path: &Path) -> Result<FileMeta>;

    /// Like `metadata(..).kind == EntryKind::Dir`, but follows symlinks.
    fn is_dir(&self, path: &Path) -> bool;

    /// Return a list of entries in a directory.
    /// Returns full paths.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("reading file {:?}", path))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn metadata(&self, path: &Path) -> Result<FileMeta> {
        let meta = fs::symlink_metadata(path)
            .with_context(|| format!("reading metadata of {:?}", path))?;
        let file_type = meta.file_type();
        let kind = if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::Other
        };
        let modified = meta
            .modified()
            .with_context(|| format!("reading modification time of {:?}", path))?;
        Ok(FileMeta { kind, modified })
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(path).with_context(|| format!("reading dir {:?}", path))?;
        Ok(readable_entries(path, entries)
            .into_iter()
            .map(|entry| entry.path())
            .collect())
    }
}

/// Keep the entries that could be read; a single bad entry must not hide
/// its siblings.
fn readable_entries<T>(dir: &Path, entries: impl IntoIterator<Item = std::io::Result<T>>) -> Vec<T> {
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                trace!(dir = ?dir, error = %err, "skipping unreadable directory entry");
                None
            }
        })
        .collect()
}
