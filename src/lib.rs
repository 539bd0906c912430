// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod report;
pub mod types;
pub mod watch;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{load_or_default, WatchConfig};
use crate::engine::{WatchLoop, WatchOptions};
use crate::exec::ShellCommandRunner;
use crate::fs::{FileSystem, RealFileSystem};
use crate::report::ConsoleNotifier;
use crate::watch::{DirectoryScanner, ScanFilter};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (once; missing file → empty config)
/// - scanner + engine + entry-point runner + console notifier
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let config_path = PathBuf::from(&args.config);
    let cfg = load_or_default(fs.as_ref(), &config_path)
        .with_context(|| format!("loading config from {:?}", config_path))?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    // Configured directories are relative to the working directory.
    let root = std::env::current_dir().context("resolving working directory")?;
    let filter = ScanFilter::from_config(&cfg)?;
    let scanner = DirectoryScanner::new(fs, root, filter);
    let notifier = ConsoleNotifier::new(scanner.root());

    let watch_loop = WatchLoop::new(
        cfg,
        scanner,
        ShellCommandRunner::new(),
        notifier,
        WatchOptions::default(),
    );

    watch_loop
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                std::future::pending::<()>().await;
            }
        })
        .await
}

/// Simple dry-run output: print the effective configuration.
fn print_dry_run(cfg: &WatchConfig) {
    println!("tickwatch dry-run");
    println!("  extension = {}", cfg.extension());
    println!("  entry_point = {}", cfg.entry_point());
    println!("  diff_policy = {}", cfg.diff_policy());
    if !cfg.exclude().is_empty() {
        println!("  exclude = {:?}", cfg.exclude());
    }
    println!();

    println!("directories ({}):", cfg.directories().len());
    for dir in cfg.directories() {
        let note = if dir.is_dir() { "" } else { " (missing)" };
        println!("  - {}{note}", dir.display());
    }

    debug!("dry-run complete (nothing watched)");
}
