// src/engine/snapshot.rs

use std::collections::HashMap;

use crate::watch::{FileIdentity, WatchedFile};

/// Every matching file seen by one scan, keyed by identity.
///
/// Built from scratch on each tick; never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    files: HashMap<FileIdentity, WatchedFile>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, replacing any earlier entry for the same path.
    pub fn insert(&mut self, file: WatchedFile) {
        self.files.insert(file.identity(), file);
    }

    pub fn get(&self, identity: &FileIdentity) -> Option<&WatchedFile> {
        self.files.get(identity)
    }

    pub fn contains(&self, identity: &FileIdentity) -> bool {
        self.files.contains_key(identity)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> impl Iterator<Item = &WatchedFile> {
        self.files.values()
    }
}

impl FromIterator<WatchedFile> for Snapshot {
    fn from_iter<I: IntoIterator<Item = WatchedFile>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for file in iter {
            snapshot.insert(file);
        }
        snapshot
    }
}

/// Holds at most two generations: the one just captured and the one before.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: Option<Snapshot>,
    previous: Option<Snapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the snapshot produced by this tick.
    pub fn capture(&mut self, snapshot: Snapshot) {
        self.current = Some(snapshot);
    }

    /// Move `current` into `previous`, dropping the older generation.
    ///
    /// If nothing was captured since the last rotation, `previous` is left
    /// as it is.
    pub fn rotate(&mut self) {
        if let Some(current) = self.current.take() {
            self.previous = Some(current);
        }
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    pub fn previous(&self) -> Option<&Snapshot> {
        self.previous.as_ref()
    }

    /// `(previous, current)` when both generations are present.
    pub fn pair(&self) -> Option<(&Snapshot, &Snapshot)> {
        Some((self.previous.as_ref()?, self.current.as_ref()?))
    }
}
