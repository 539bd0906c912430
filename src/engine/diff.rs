// src/engine/diff.rs

//! Snapshot comparison.
//!
//! [`classify`] is pure: it only looks at the two snapshots and never touches
//! the filesystem, the console or the entry point.

use std::fmt;

use crate::engine::snapshot::Snapshot;
use crate::types::DiffPolicy;
use crate::watch::WatchedFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Added,
    Modified,
    Removed,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Added => f.write_str("Added"),
            ChangeKind::Modified => f.write_str("Modified"),
            ChangeKind::Removed => f.write_str("Removed"),
        }
    }
}

/// A classified change. For `Removed` the file is the last version seen in
/// the previous snapshot; otherwise it is the version in the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub file: WatchedFile,
}

impl ChangeEvent {
    pub fn new(kind: ChangeKind, file: WatchedFile) -> Self {
        Self { kind, file }
    }
}

/// Compare two generations and list what changed.
///
/// Under [`DiffPolicy::Exclusive`] only one kind of change is looked for,
/// chosen by snapshot size:
/// 1. same size → `Modified` for shared files whose mtime differs
/// 2. fewer files → `Removed` for files missing from `current`
/// 3. more files → `Added` for files missing from `previous`
///
/// so a tick that adds one file and removes another is seen as "same size"
/// and only modifications are reported.
///
/// [`DiffPolicy::ThreeWay`] reports removed, added and modified files
/// independently, in that order.
///
/// Within a kind, events are sorted by path.
pub fn classify(previous: &Snapshot, current: &Snapshot, policy: DiffPolicy) -> Vec<ChangeEvent> {
    match policy {
        DiffPolicy::Exclusive => {
            if current.len() == previous.len() {
                modified(previous, current)
            } else if current.len() < previous.len() {
                removed(previous, current)
            } else {
                added(previous, current)
            }
        }
        DiffPolicy::ThreeWay => {
            let mut events = removed(previous, current);
            events.extend(added(previous, current));
            events.extend(modified(previous, current));
            events
        }
    }
}

fn modified(previous: &Snapshot, current: &Snapshot) -> Vec<ChangeEvent> {
    let files = current.files().filter(|cur| {
        previous
            .get(&cur.identity())
            .is_some_and(|prev| prev.modified() != cur.modified())
    });
    collect_sorted(ChangeKind::Modified, files)
}

fn removed(previous: &Snapshot, current: &Snapshot) -> Vec<ChangeEvent> {
    let files = previous
        .files()
        .filter(|prev| !current.contains(&prev.identity()));
    collect_sorted(ChangeKind::Removed, files)
}

fn added(previous: &Snapshot, current: &Snapshot) -> Vec<ChangeEvent> {
    let files = current
        .files()
        .filter(|cur| !previous.contains(&cur.identity()));
    collect_sorted(ChangeKind::Added, files)
}

fn collect_sorted<'a>(
    kind: ChangeKind,
    files: impl Iterator<Item = &'a WatchedFile>,
) -> Vec<ChangeEvent> {
    let mut events: Vec<ChangeEvent> = files
        .map(|file| ChangeEvent::new(kind, file.clone()))
        .collect();
    events.sort_by(|a, b| a.file.path().cmp(b.file.path()));
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    fn snap(files: &[(&str, u64)]) -> Snapshot {
        files
            .iter()
            .map(|(p, t)| WatchedFile::new(*p, UNIX_EPOCH + Duration::from_secs(*t)))
            .collect()
    }

    fn summary(events: &[ChangeEvent]) -> Vec<(ChangeKind, String)> {
        events
            .iter()
            .map(|e| (e.kind, e.file.path().to_string_lossy().into_owned()))
            .collect()
    }

    #[test]
    fn swap_at_equal_size_is_invisible_to_exclusive_policy() {
        let prev = snap(&[("a.src", 100), ("b.src", 100)]);
        let cur = snap(&[("a.src", 100), ("c.src", 100)]);

        assert!(classify(&prev, &cur, DiffPolicy::Exclusive).is_empty());
    }

    #[test]
    fn exclusive_policy_ignores_modifications_when_files_were_added() {
        let prev = snap(&[("a.src", 100)]);
        let cur = snap(&[("a.src", 200), ("b.src", 100)]);

        assert_eq!(
            summary(&classify(&prev, &cur, DiffPolicy::Exclusive)),
            vec![(ChangeKind::Added, "b.src".to_string())]
        );
    }

    #[test]
    fn three_way_reports_everything_in_kind_order() {
        let prev = snap(&[("a.src", 100), ("b.src", 100), ("z.src", 1)]);
        let cur = snap(&[("a.src", 300), ("c.src", 100), ("z.src", 1)]);

        assert_eq!(
            summary(&classify(&prev, &cur, DiffPolicy::ThreeWay)),
            vec![
                (ChangeKind::Removed, "b.src".to_string()),
                (ChangeKind::Added, "c.src".to_string()),
                (ChangeKind::Modified, "a.src".to_string()),
            ]
        );
    }

    #[test]
    fn removed_events_carry_the_previous_version() {
        let prev = snap(&[("a.src", 100), ("b.src", 42)]);
        let cur = snap(&[("a.src", 100)]);

        let events = classify(&prev, &cur, DiffPolicy::Exclusive);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].file.modified(), UNIX_EPOCH + Duration::from_secs(42));
    }

    #[test]
    fn events_are_sorted_by_path() {
        let prev = snap(&[]);
        let cur = snap(&[("c.src", 1), ("a.src", 1), ("b.src", 1)]);

        let paths: Vec<_> = summary(&classify(&prev, &cur, DiffPolicy::Exclusive))
            .into_iter()
            .map(|(_, p)| p)
            .collect();
        assert_eq!(paths, vec!["a.src", "b.src", "c.src"]);
    }
}
