// src/engine/mod.rs

//! Watch engine for tickwatch.
//!
//! This module ties together:
//! - the two-generation snapshot store
//! - the diff classifier (a pure function over two snapshots)
//! - the pure engine state machine (Idle → Primed → Steady)
//! - the polling loop that scans, classifies, notifies and runs the entry point

pub mod core;
pub mod diff;
pub mod runtime;
pub mod snapshot;

pub use self::core::{EngineState, TickOutcome, WatchEngine};
pub use diff::{classify, ChangeEvent, ChangeKind};
pub use runtime::{TickReport, WatchLoop, WatchOptions, DEFAULT_POLL_INTERVAL};
pub use snapshot::{Snapshot, SnapshotStore};
