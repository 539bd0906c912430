// src/config/loader.rs

use std::path::Path;

use tracing::{debug, info};

use crate::config::model::{RawConfigFile, WatchConfig};
use crate::errors::Result;
use crate::fs::FileSystem;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "watch.json";

/// Serialization format of a config file, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// `.toml` means TOML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Parse and validate config contents.
pub fn parse_config(contents: &str, format: ConfigFormat) -> Result<WatchConfig> {
    let raw: RawConfigFile = match format {
        ConfigFormat::Json => serde_json::from_str(contents)?,
        ConfigFormat::Toml => toml::from_str(contents)?,
    };
    WatchConfig::try_from(raw)
}

/// Load the watcher configuration once at startup.
///
/// - Missing file: returns `WatchConfig::default()` (no directories, the
///   watcher stays idle).
/// - Unreadable, malformed or invalid file: returns an error. There is no
///   partial or merged configuration.
pub fn load_or_default(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<WatchConfig> {
    let path = path.as_ref();

    if !fs.exists(path) {
        info!(path = ?path, "no config file found; starting with an empty configuration");
        return Ok(WatchConfig::default());
    }

    let contents = fs.read_to_string(path)?;
    let format = ConfigFormat::from_path(path);
    debug!(path = ?path, ?format, "parsing config file");

    let cfg = parse_config(&contents, format)?;
    info!(
        path = ?path,
        directories = cfg.directories().len(),
        extension = %cfg.extension(),
        "loaded config"
    );
    Ok(cfg)
}
