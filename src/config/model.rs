// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::errors::{Result, WatchError};
use crate::types::DiffPolicy;

pub const DEFAULT_EXTENSION: &str = "php";
pub const DEFAULT_ENTRY_POINT: &str = "php index.php";

/// Configuration as read from `watch.json` (or a TOML equivalent).
///
/// ```json
/// {
///   "directories": ["src", "app/Controllers"],
///   "extension": "php",
///   "entry_point": "php index.php",
///   "exclude": ["src/cache/**"],
///   "diff_policy": "exclusive"
/// }
/// ```
///
/// Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    /// Directories to scan, relative to the project root, in order.
    #[serde(default)]
    pub directories: Vec<String>,

    /// Source-file extension to monitor, with or without the leading dot.
    #[serde(default)]
    pub extension: Option<String>,

    /// Command re-run on every detected change.
    #[serde(default)]
    pub entry_point: Option<String>,

    /// Glob patterns (relative to the project root) never reported.
    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub diff_policy: DiffPolicy,
}

/// Validated, immutable watcher configuration.
///
/// Built once at startup. An empty `directories` list means the watcher
/// stays idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    directories: Vec<PathBuf>,
    extension: String,
    entry_point: String,
    exclude: Vec<String>,
    diff_policy: DiffPolicy,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            directories: Vec::new(),
            extension: DEFAULT_EXTENSION.to_string(),
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            exclude: Vec::new(),
            diff_policy: DiffPolicy::default(),
        }
    }
}

impl TryFrom<RawConfigFile> for WatchConfig {
    type Error = WatchError;

    fn try_from(raw: RawConfigFile) -> Result<Self> {
        crate::config::validate::validate_config(&raw)?;

        let extension = raw
            .extension
            .map(|ext| ext.trim().trim_start_matches('.').to_string())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        let entry_point = raw
            .entry_point
            .map(|cmd| cmd.trim().to_string())
            .unwrap_or_else(|| DEFAULT_ENTRY_POINT.to_string());

        Ok(Self {
            directories: raw.directories.iter().map(PathBuf::from).collect(),
            extension,
            entry_point,
            exclude: raw.exclude,
            diff_policy: raw.diff_policy,
        })
    }
}

impl WatchConfig {
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// True when there is nothing to watch.
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    /// Extension without the leading dot, e.g. `"php"`.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    pub fn diff_policy(&self) -> DiffPolicy {
        self.diff_policy
    }
}
