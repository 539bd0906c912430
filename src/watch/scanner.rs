// src/watch/scanner.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::engine::Snapshot;
use crate::fs::{EntryKind, FileSystem};
use crate::watch::cache::StatCache;
use crate::watch::identity::WatchedFile;
use crate::watch::patterns::ScanFilter;

/// Recursively lists the source files under the configured directories.
///
/// Every call re-reads the tree; the only state kept between calls is the
/// [`StatCache`], which the owner must invalidate before each tick.
#[derive(Debug)]
pub struct DirectoryScanner {
    fs: Arc<dyn FileSystem>,
    root: PathBuf,
    filter: ScanFilter,
    cache: StatCache,
}

impl DirectoryScanner {
    /// `root` is the project root that configured directories are joined to.
    pub fn new(fs: Arc<dyn FileSystem>, root: impl Into<PathBuf>, filter: ScanFilter) -> Self {
        Self {
            fs,
            root: root.into(),
            filter,
            cache: StatCache::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Drop cached metadata so the next scan sees fresh modification times.
    pub fn invalidate_cache(&mut self) {
        self.cache.invalidate_all();
    }

    pub fn cache(&self) -> &StatCache {
        &self.cache
    }

    /// List matching files below one configured directory.
    ///
    /// A directory that does not exist (or is not a directory) yields an
    /// empty list. A symlinked configured directory is followed. Entries that are neither regular files nor directories are
    /// skipped, and so are sub-directories that cannot be read.
    pub fn scan_directory(&mut self, dir: &Path) -> Vec<WatchedFile> {
        let start = self.root.join(dir);

        // The configured directory itself may be a symlink; everything below
        // it is listed without following links.
        if !self.fs.is_dir(&start) {
            debug!(dir = ?start, "watched directory missing or not a directory; skipping");
            return Vec::new();
        }

        let mut files = Vec::new();
        let mut pending = vec![start];

        while let Some(current) = pending.pop() {
            let children = match self.fs.read_dir(&current) {
                Ok(children) => children,
                Err(err) => {
                    warn!(dir = ?current, error = %err, "cannot read directory; skipping");
                    continue;
                }
            };

            for child in children {
                let meta = match self.cache.get_or_stat(self.fs.as_ref(), &child) {
                    Ok(meta) => meta,
                    Err(err) => {
                        // Raced with a deletion; the next tick will notice.
                        trace!(path = ?child, error = %err, "entry vanished during scan");
                        continue;
                    }
                };

                match meta.kind {
                    EntryKind::Dir => pending.push(child),
                    EntryKind::File if self.filter.matches(&self.root, &child) => {
                        files.push(WatchedFile::new(child, meta.modified));
                    }
                    EntryKind::File | EntryKind::Other => {}
                }
            }
        }

        trace!(dir = ?dir, files = files.len(), "scanned directory");
        files
    }

    /// Build a fresh snapshot from all configured directories, in order.
    ///
    /// Files reachable from more than one directory appear once.
    pub fn scan_all(&mut self, dirs: &[PathBuf]) -> Snapshot {
        let mut snapshot = Snapshot::new();
        for dir in dirs {
            for file in self.scan_directory(dir) {
                snapshot.insert(file);
            }
        }
        debug!(
            directories = dirs.len(),
            files = snapshot.len(),
            cache_hits = self.cache.hits(),
            "scan complete"
        );
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::{mtime, MockFileSystem};

    fn scanner(fs: &MockFileSystem) -> DirectoryScanner {
        let filter = ScanFilter::new("php", &[]).unwrap();
        DirectoryScanner::new(Arc::new(fs.clone()), "/p", filter)
    }

    #[test]
    fn walks_nested_directories() {
        let fs = MockFileSystem::new();
        fs.add_file("/p/src/a.php", "", mtime(1));
        fs.add_file("/p/src/deep/er/b.php", "", mtime(2));
        fs.add_file("/p/src/readme.md", "", mtime(3));

        let mut files = scanner(&fs).scan_directory(Path::new("src"));
        files.sort_by(|a, b| a.path().cmp(b.path()));

        let paths: Vec<_> = files.iter().map(|f| f.path().to_path_buf()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/p/src/a.php"),
                PathBuf::from("/p/src/deep/er/b.php")
            ]
        );
        assert_eq!(files[1].modified(), mtime(2));
    }

    #[test]
    fn ignores_links_and_missing_directories() {
        let fs = MockFileSystem::new();
        fs.add_file("/p/src/a.php", "", mtime(1));
        fs.add_link("/p/src/loop.php");

        let mut scanner = scanner(&fs);
        assert_eq!(scanner.scan_directory(Path::new("src")).len(), 1);
        assert!(scanner.scan_directory(Path::new("gone")).is_empty());
        assert!(scanner.scan_directory(Path::new("src/a.php")).is_empty());
    }

    #[test]
    fn overlapping_directories_are_deduplicated_and_cached() {
        let fs = MockFileSystem::new();
        fs.add_file("/p/src/app/a.php", "", mtime(1));

        let mut scanner = scanner(&fs);
        let snapshot = scanner.scan_all(&[PathBuf::from("src"), PathBuf::from("src/app")]);

        assert_eq!(snapshot.len(), 1);
        assert!(scanner.cache().hits() > 0);

        scanner.invalidate_cache();
        assert!(scanner.cache().is_empty());
    }
}
