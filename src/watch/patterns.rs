// src/watch/patterns.rs

use std::fmt;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::WatchConfig;
use crate::errors::Result;
use crate::watch::path_utils::relative_str;

/// Decides whether a regular file found by the scanner is a watched source.
///
/// A file qualifies when its extension equals the configured one
/// (case-sensitive) and its path relative to the project root matches none
/// of the exclude globs.
#[derive(Clone)]
pub struct ScanFilter {
    extension: String,
    exclude_set: Option<GlobSet>,
}

impl fmt::Debug for ScanFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanFilter")
            .field("extension", &self.extension)
            .finish_non_exhaustive()
    }
}

impl ScanFilter {
    pub fn new(extension: impl Into<String>, exclude: &[String]) -> Result<Self> {
        let exclude_set = if exclude.is_empty() {
            None
        } else {
            Some(build_globset(exclude)?)
        };
        Ok(Self {
            extension: extension.into(),
            exclude_set,
        })
    }

    pub fn from_config(cfg: &WatchConfig) -> Result<Self> {
        Self::new(cfg.extension(), cfg.exclude())
    }

    /// `root` is the project root the exclude globs are relative to.
    pub fn matches(&self, root: &Path, path: &Path) -> bool {
        let ext_ok = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == self.extension);
        if !ext_ok {
            return false;
        }

        if let Some(exclude) = &self.exclude_set {
            let rel = relative_str(root, path)
                .unwrap_or_else(|| path.to_string_lossy().replace('\\', "/"));
            if exclude.is_match(&rel) {
                return false;
            }
        }
        true
    }
}

/// Build a GlobSet from simple string patterns.
fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat)?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_is_exact() {
        let filter = ScanFilter::new("php", &[]).unwrap();
        let root = Path::new("/p");
        assert!(filter.matches(root, Path::new("/p/src/a.php")));
        assert!(!filter.matches(root, Path::new("/p/src/a.PHP")));
        assert!(!filter.matches(root, Path::new("/p/src/a.php.bak")));
        assert!(!filter.matches(root, Path::new("/p/src/php")));
    }

    #[test]
    fn exclude_globs_are_relative_to_root() {
        let filter = ScanFilter::new("php", &["src/cache/**".to_string()]).unwrap();
        let root = Path::new("/p");
        assert!(!filter.matches(root, Path::new("/p/src/cache/views/a.php")));
        assert!(filter.matches(root, Path::new("/p/src/app/a.php")));
    }
}
