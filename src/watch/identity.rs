// src/watch/identity.rs

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use blake3::Hasher;

/// Stable key for a watched path.
///
/// A blake3 digest of the path string. It depends on the path only, never on
/// the file's contents, so the same file keeps its identity across
/// generations no matter how often it is edited.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileIdentity(blake3::Hash);

impl FileIdentity {
    pub fn of(path: &Path) -> Self {
        let mut hasher = Hasher::new();
        hasher.update(path.to_string_lossy().as_bytes());
        Self(hasher.finalize())
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex().to_string()
    }
}

impl fmt::Debug for FileIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The first 12 hex chars are plenty to tell entries apart in logs.
        write!(f, "FileIdentity({})", &self.to_hex()[..12])
    }
}

impl fmt::Display for FileIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// One matching source file as seen by a single scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedFile {
    path: PathBuf,
    modified: SystemTime,
    identity: FileIdentity,
}

impl WatchedFile {
    pub fn new(path: impl Into<PathBuf>, modified: SystemTime) -> Self {
        let path = path.into();
        let identity = FileIdentity::of(&path);
        Self {
            path,
            modified,
            identity,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    pub fn identity(&self) -> FileIdentity {
        self.identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn identity_is_deterministic() {
        let a = FileIdentity::of(Path::new("src/a.php"));
        let b = FileIdentity::of(Path::new("src/a.php"));
        assert_eq!(a, b);
        assert_eq!(a.to_hex(), b.to_hex());
        assert_eq!(a.to_hex().len(), 64);
    }

    #[test]
    fn identity_ignores_modification_time() {
        let old = WatchedFile::new("src/a.php", UNIX_EPOCH + Duration::from_secs(100));
        let new = WatchedFile::new("src/a.php", UNIX_EPOCH + Duration::from_secs(200));
        assert_eq!(old.identity(), new.identity());
        assert_ne!(old, new);
    }

    #[test]
    fn different_paths_get_different_identities() {
        assert_ne!(
            FileIdentity::of(Path::new("src/a.php")),
            FileIdentity::of(Path::new("src/b.php"))
        );
    }
}
