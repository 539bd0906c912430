// src/config/validate.rs

use globset::Glob;

use crate::config::model::RawConfigFile;
use crate::errors::{Result, WatchError};

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - no directory entry is blank
/// - `extension`, when given, is non-empty once the leading dot is removed
/// - `entry_point`, when given, is non-empty
/// - every `exclude` pattern is a valid glob
///
/// It does **not** check that the directories exist; a missing directory
/// simply contributes no files.
pub fn validate_config(cfg: &RawConfigFile) -> Result<()> {
    validate_directories(cfg)?;
    validate_extension(cfg)?;
    validate_entry_point(cfg)?;
    validate_exclude(cfg)?;
    Ok(())
}

fn validate_directories(cfg: &RawConfigFile) -> Result<()> {
    if let Some(pos) = cfg.directories.iter().position(|d| d.trim().is_empty()) {
        return Err(WatchError::ConfigError(format!(
            "directories[{pos}] must not be empty"
        )));
    }
    Ok(())
}

fn validate_extension(cfg: &RawConfigFile) -> Result<()> {
    if let Some(ext) = &cfg.extension {
        if ext.trim().trim_start_matches('.').is_empty() {
            return Err(WatchError::ConfigError(format!(
                "extension must name a file type (got {ext:?})"
            )));
        }
    }
    Ok(())
}

fn validate_entry_point(cfg: &RawConfigFile) -> Result<()> {
    if let Some(cmd) = &cfg.entry_point {
        if cmd.trim().is_empty() {
            return Err(WatchError::ConfigError(
                "entry_point must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_exclude(cfg: &RawConfigFile) -> Result<()> {
    for pat in &cfg.exclude {
        Glob::new(pat)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_empty_config() {
        assert!(validate_config(&RawConfigFile::default()).is_ok());
    }

    #[test]
    fn rejects_blank_directory() {
        let cfg = RawConfigFile {
            directories: vec!["src".into(), "  ".into()],
            ..RawConfigFile::default()
        };
        let err = validate_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("directories[1]"));
    }

    #[test]
    fn rejects_dot_only_extension() {
        let cfg = RawConfigFile {
            extension: Some(".".into()),
            ..RawConfigFile::default()
        };
        assert!(matches!(validate_config(&cfg), Err(WatchError::ConfigError(_))));
    }

    #[test]
    fn rejects_blank_entry_point() {
        let cfg = RawConfigFile {
            entry_point: Some(String::new()),
            ..RawConfigFile::default()
        };
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn rejects_invalid_glob() {
        let cfg = RawConfigFile {
            exclude: vec!["src/[".into()],
            ..RawConfigFile::default()
        };
        assert!(matches!(validate_config(&cfg), Err(WatchError::PatternError(_))));
    }
}
