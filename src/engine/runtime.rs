// src/engine/runtime.rs

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, error, info, warn};

use crate::config::WatchConfig;
use crate::engine::core::{EngineState, WatchEngine};
use crate::engine::diff::ChangeEvent;
use crate::exec::CommandRunner;
use crate::report::ChangeNotifier;
use crate::watch::DirectoryScanner;

/// Fixed pause between two ticks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Options that influence how the loop behaves.
#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub poll_interval: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// What a single tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub state: EngineState,
    /// False when the configuration has no directories.
    pub scanned: bool,
    pub events: Vec<ChangeEvent>,
    /// Number of entry-point runs that completed (successfully or not).
    pub runs: usize,
}

/// The polling shell around [`WatchEngine`].
///
/// Each tick, strictly in sequence:
/// 1. invalidate cached metadata
/// 2. scan every configured directory (skipped when there are none)
/// 3. classify against the previous generation
/// 4. per event: notify, then run the entry point and wait for it
/// 5. rotate the current snapshot into the previous slot
///
/// Changes made while the entry point runs are picked up by the next tick.
pub struct WatchLoop<R, N> {
    config: WatchConfig,
    scanner: DirectoryScanner,
    engine: WatchEngine,
    runner: R,
    notifier: N,
    options: WatchOptions,
}

impl<R, N> WatchLoop<R, N>
where
    R: CommandRunner,
    N: ChangeNotifier,
{
    pub fn new(
        config: WatchConfig,
        scanner: DirectoryScanner,
        runner: R,
        notifier: N,
        options: WatchOptions,
    ) -> Self {
        let engine = WatchEngine::new(config.diff_policy());
        Self {
            config,
            scanner,
            engine,
            runner,
            notifier,
            options,
        }
    }

    pub fn state(&self) -> EngineState {
        self.engine.state()
    }

    /// Poll forever, pausing `poll_interval` before every tick, until
    /// `shutdown` resolves.
    ///
    /// `shutdown` is only checked while sleeping; a running entry point is
    /// always awaited to completion.
    pub async fn run_until<S>(mut self, shutdown: S) -> Result<()>
    where
        S: Future<Output = ()>,
    {
        info!(
            directories = ?self.config.directories(),
            interval = ?self.options.poll_interval,
            policy = %self.config.diff_policy(),
            "watch loop started"
        );
        if self.config.is_empty() {
            info!("no directories configured; watcher will stay idle");
        }

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("shutdown requested, stopping watch loop");
                    break;
                }
                _ = tokio::time::sleep(self.options.poll_interval) => {}
            }

            self.tick().await;
        }

        Ok(())
    }

    /// Run one tick without sleeping.
    pub async fn tick(&mut self) -> TickReport {
        self.scanner.invalidate_cache();

        if self.config.is_empty() {
            self.engine.rotate();
            return TickReport {
                state: self.engine.state(),
                scanned: false,
                events: Vec::new(),
                runs: 0,
            };
        }

        let snapshot = self.scanner.scan_all(self.config.directories());
        let outcome = self.engine.observe(snapshot);

        if outcome.primed {
            info!("baseline captured; watching for changes");
            if let Err(err) = self.notifier.startup() {
                warn!(error = %err, "failed to write startup notice");
            }
        }

        let mut runs = 0;
        for event in &outcome.events {
            debug!(kind = %event.kind, path = ?event.file.path(), "change detected");
            if self.act_on(event).await {
                runs += 1;
            }
        }

        self.engine.rotate();

        TickReport {
            state: outcome.state,
            scanned: true,
            events: outcome.events,
            runs,
        }
    }

    /// Notify about one event and run the entry point. Returns whether the
    /// entry point actually ran.
    async fn act_on(&mut self, event: &ChangeEvent) -> bool {
        if let Err(err) = self.notifier.change(event) {
            warn!(error = %err, "failed to write change notice");
        }

        match self.runner.run(self.config.entry_point()).await {
            Ok(report) => {
                if let Err(err) = self.notifier.command_finished(&report) {
                    warn!(error = %err, "failed to write entry point output");
                }
                true
            }
            Err(err) => {
                error!(error = %err, "entry point could not be run");
                false
            }
        }
    }
}
