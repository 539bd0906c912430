// src/engine/core.rs

//! Pure engine state machine.
//!
//! [`WatchEngine`] consumes snapshots and produces classified events. It has
//! no filesystem access, no console output and no processes; the polling
//! shell (`engine::runtime::WatchLoop`) does all of that around it.

use tracing::debug;

use crate::engine::diff::{classify, ChangeEvent};
use crate::engine::snapshot::{Snapshot, SnapshotStore};
use crate::types::DiffPolicy;

/// Where the engine is in its lifecycle.
///
/// - `Idle`: nothing captured yet.
/// - `Primed`: one snapshot captured; it only serves as the baseline.
/// - `Steady`: at least two snapshots captured; every tick is diffed.
///
/// There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Primed,
    Steady,
}

/// Result of feeding one snapshot into the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    /// State after this observation.
    pub state: EngineState,
    /// True exactly on the Idle → Primed transition.
    pub primed: bool,
    pub events: Vec<ChangeEvent>,
}

#[derive(Debug)]
pub struct WatchEngine {
    store: SnapshotStore,
    state: EngineState,
    policy: DiffPolicy,
}

impl WatchEngine {
    pub fn new(policy: DiffPolicy) -> Self {
        Self {
            store: SnapshotStore::new(),
            state: EngineState::Idle,
            policy,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Capture this tick's snapshot, advance the state machine and, once
    /// steady, classify it against the previous generation.
    ///
    /// Does not rotate; call [`WatchEngine::rotate`] once the tick's events
    /// have been acted upon.
    pub fn observe(&mut self, snapshot: Snapshot) -> TickOutcome {
        self.store.capture(snapshot);

        let previous_state = self.state;
        self.state = match previous_state {
            EngineState::Idle => EngineState::Primed,
            EngineState::Primed | EngineState::Steady => EngineState::Steady,
        };

        let events = match (self.state, self.store.pair()) {
            (EngineState::Steady, Some((previous, current))) => {
                classify(previous, current, self.policy)
            }
            _ => Vec::new(),
        };

        debug!(
            from = ?previous_state,
            to = ?self.state,
            events = events.len(),
            "engine observed snapshot"
        );

        TickOutcome {
            state: self.state,
            primed: previous_state == EngineState::Idle,
            events,
        }
    }

    /// Make the current generation the baseline for the next tick.
    pub fn rotate(&mut self) {
        self.store.rotate();
    }
}
