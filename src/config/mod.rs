// src/config/mod.rs

//! Configuration loading and validation for tickwatch.
//!
//! Responsibilities:
//! - Define the serde-backed data model (`model.rs`).
//! - Load a config file from disk, falling back to an empty config when the
//!   file does not exist (`loader.rs`).
//! - Validate basic invariants like non-empty entry points (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_or_default, parse_config, ConfigFormat, DEFAULT_CONFIG_FILE};
pub use model::{RawConfigFile, WatchConfig};
pub use validate::validate_config;
