// src/watch/cache.rs

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::trace;

use crate::fs::{FileMeta, FileSystem};

/// Per-tick cache of filesystem metadata.
///
/// Within one scan the same path can be reached more than once (e.g. when
/// both `src` and `src/app` are configured). Entries must be dropped with
/// [`StatCache::invalidate_all`] before every tick, otherwise the scanner
/// would keep reporting stale modification times.
#[derive(Debug, Default)]
pub struct StatCache {
    entries: HashMap<PathBuf, FileMeta>,
    hits: u64,
}

impl StatCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the metadata for a path, stat-ing and caching it if necessary.
    pub fn get_or_stat(&mut self, fs: &dyn FileSystem, path: &Path) -> Result<FileMeta> {
        if let Some(meta) = self.entries.get(path) {
            self.hits += 1;
            return Ok(*meta);
        }

        let meta = fs.metadata(path)?;
        self.entries.insert(path.to_path_buf(), meta);
        Ok(meta)
    }

    /// Forget everything. Called at the start of every tick.
    pub fn invalidate_all(&mut self) {
        trace!(entries = self.entries.len(), hits = self.hits, "invalidating stat cache");
        self.entries.clear();
        self.hits = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups served from the cache since the last invalidation.
    pub fn hits(&self) -> u64 {
        self.hits
    }
}
