// src/watch/path_utils.rs

//! Utility functions for path handling in the scanner.

use std::path::Path;

/// Convert a path into a string relative to `root`, with forward slashes.
///
/// Returns `None` if the path is not under `root`.
pub fn relative_str(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    Some(rel.to_string_lossy().replace('\\', "/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_root_and_normalises_separators() {
        assert_eq!(
            relative_str(Path::new("/work"), Path::new("/work/src/a.php")).as_deref(),
            Some("src/a.php")
        );
        assert_eq!(relative_str(Path::new("/work"), Path::new("/elsewhere/a.php")), None);
    }
}
