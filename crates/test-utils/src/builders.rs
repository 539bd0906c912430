#![allow(dead_code)]

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tickwatch::config::{RawConfigFile, WatchConfig};
use tickwatch::engine::Snapshot;
use tickwatch::types::DiffPolicy;
use tickwatch::watch::WatchedFile;

/// Modification time `secs` seconds after the epoch.
pub fn at(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}

/// Builder for `Snapshot` to keep scenario tests short.
#[derive(Default)]
pub struct SnapshotBuilder {
    files: Vec<WatchedFile>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, path: &str, modified_secs: u64) -> Self {
        self.files.push(WatchedFile::new(path, at(modified_secs)));
        self
    }

    pub fn build(self) -> Snapshot {
        self.files.into_iter().collect()
    }
}

/// Builder for `WatchConfig`.
pub struct WatchConfigBuilder {
    raw: RawConfigFile,
}

impl WatchConfigBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawConfigFile::default(),
        }
    }

    pub fn directory(mut self, dir: &str) -> Self {
        self.raw.directories.push(dir.to_string());
        self
    }

    pub fn extension(mut self, ext: &str) -> Self {
        self.raw.extension = Some(ext.to_string());
        self
    }

    pub fn entry_point(mut self, cmd: &str) -> Self {
        self.raw.entry_point = Some(cmd.to_string());
        self
    }

    pub fn exclude(mut self, pattern: &str) -> Self {
        self.raw.exclude.push(pattern.to_string());
        self
    }

    pub fn policy(mut self, policy: DiffPolicy) -> Self {
        self.raw.diff_policy = policy;
        self
    }

    pub fn build(self) -> WatchConfig {
        WatchConfig::try_from(self.raw).expect("Failed to build valid config from builder")
    }
}

impl Default for WatchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
