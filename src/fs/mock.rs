// src/fs/mock.rs

use super::{EntryKind, FileMeta, FileSystem};
use anyhow::{anyhow, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File { content: Vec<u8>, modified: SystemTime },
    Dir,
    Link,
}

/// In-memory filesystem with controllable modification times.
///
/// Clones share the same tree, so a test can keep a handle while the
/// scanner owns another.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    entries: Arc<Mutex<BTreeMap<PathBuf, MockEntry>>>,
}

/// Build a modification time from whole seconds since the epoch.
pub fn mtime(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}

impl MockFileSystem {
    pub fn new() -> Self {
        let fs = Self::default();
        fs.add_dir(".");
        fs
    }

    /// Add (or overwrite) a file, creating parent directories implicitly.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>, modified: SystemTime) {
        let path = path.as_ref().to_path_buf();
        let mut entries = self.entries.lock().unwrap();
        ensure_parents(&mut entries, &path);
        entries.insert(
            path,
            MockEntry::File {
                content: content.into(),
                modified,
            },
        );
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        let mut entries = self.entries.lock().unwrap();
        ensure_parents(&mut entries, &path);
        entries.entry(path).or_insert(MockEntry::Dir);
    }

    /// Add an entry that is neither a file nor a directory (e.g. a symlink).
    pub fn add_link(&self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        let mut entries = self.entries.lock().unwrap();
        ensure_parents(&mut entries, &path);
        entries.insert(path, MockEntry::Link);
    }

    /// Change the modification time of an existing file.
    pub fn touch(&self, path: impl AsRef<Path>, modified: SystemTime) {
        let mut entries = self.entries.lock().unwrap();
        if let Some(MockEntry::File { modified: m, .. }) = entries.get_mut(path.as_ref()) {
            *m = modified;
        }
    }

    /// Remove a path and everything below it.
    pub fn remove(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|p, _| !p.starts_with(path));
    }
}

fn ensure_parents(entries: &mut BTreeMap<PathBuf, MockEntry>, path: &Path) {
    let mut current = path.parent();
    while let Some(parent) = current {
        if parent.as_os_str().is_empty() {
            break;
        }
        entries.entry(parent.to_path_buf()).or_insert(MockEntry::Dir);
        current = parent.parent();
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let entries = self.entries.lock().unwrap();
        match entries.get(path) {
            Some(MockEntry::File { content, .. }) => {
                String::from_utf8(content.clone()).map_err(|e| anyhow!("Invalid UTF-8: {}", e))
            }
            Some(_) => Err(anyhow!("Not a file: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        let entries = self.entries.lock().unwrap();
        entries.contains_key(path)
    }

    fn metadata(&self, path: &Path) -> Result<FileMeta> {
        let entries = self.entries.lock().unwrap();
        match entries.get(path) {
            Some(MockEntry::File { modified, .. }) => Ok(FileMeta {
                kind: EntryKind::File,
                modified: *modified,
            }),
            Some(MockEntry::Dir) => Ok(FileMeta {
                kind: EntryKind::Dir,
                modified: UNIX_EPOCH,
            }),
            Some(MockEntry::Link) => Ok(FileMeta {
                kind: EntryKind::Other,
                modified: UNIX_EPOCH,
            }),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        let entries = self.entries.lock().unwrap();
        matches!(entries.get(path), Some(MockEntry::Dir))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let entries = self.entries.lock().unwrap();
        match entries.get(path) {
            Some(MockEntry::Dir) => Ok(entries
                .keys()
                .filter(|p| p.parent() == Some(path))
                .cloned()
                .collect()),
            _ => Err(anyhow!("Not a directory or not found: {:?}", path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_create_their_parent_directories() {
        let fs = MockFileSystem::new();
        fs.add_file("src/app/main.php", "<?php", mtime(10));

        assert_eq!(fs.metadata(Path::new("src")).unwrap().kind, EntryKind::Dir);
        assert_eq!(
            fs.read_dir(Path::new("src")).unwrap(),
            vec![PathBuf::from("src/app")]
        );
        assert_eq!(
            fs.metadata(Path::new("src/app/main.php")).unwrap().modified,
            mtime(10)
        );
    }

    #[test]
    fn remove_drops_the_whole_subtree() {
        let fs = MockFileSystem::new();
        fs.add_file("src/a.php", "", mtime(1));
        fs.add_file("src/sub/b.php", "", mtime(1));
        fs.add_file("srcs/c.php", "", mtime(1));

        fs.remove("src");

        assert!(!fs.exists(Path::new("src/sub/b.php")));
        assert!(!fs.exists(Path::new("src")));
        assert!(fs.exists(Path::new("srcs/c.php")));
    }

    #[test]
    fn touch_only_changes_files() {
        let fs = MockFileSystem::new();
        fs.add_file("a.php", "", mtime(1));
        fs.touch("a.php", mtime(2));
        fs.touch("missing.php", mtime(3));

        assert_eq!(fs.metadata(Path::new("a.php")).unwrap().modified, mtime(2));
        assert!(!fs.exists(Path::new("missing.php")));
    }
}
