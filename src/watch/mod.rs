// src/watch/mod.rs

//! Polling-based change detection input.
//!
//! This module is responsible for:
//! - Deriving a stable identity for every watched path (`identity`).
//! - Deciding which files count as sources (`patterns`).
//! - Caching filesystem metadata for the duration of a single tick (`cache`).
//! - Walking the configured directories into a fresh [`Snapshot`] (`scanner`).
//!
//! It does **not** compare snapshots; that lives in `engine::diff`.
//!
//! [`Snapshot`]: crate::engine::Snapshot

pub mod cache;
pub mod identity;
pub mod path_utils;
pub mod patterns;
pub mod scanner;

pub use cache::StatCache;
pub use identity::{FileIdentity, WatchedFile};
pub use patterns::ScanFilter;
pub use scanner::DirectoryScanner;
