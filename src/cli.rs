// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::config::loader::DEFAULT_CONFIG_FILE;

/// Command-line arguments for `tickwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tickwatch",
    version,
    about = "Poll source directories and re-run an entry point whenever files change.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (JSON, or TOML when the extension is `.toml`).
    ///
    /// A missing file is not an error: the watcher starts with no directories.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TICKWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load + validate the config, print it, but don't start watching.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_watch_json() {
        let args = CliArgs::parse_from(["tickwatch"]);
        assert_eq!(args.config, "watch.json");
        assert!(!args.dry_run);
        assert!(args.log_level.is_none());
    }

    #[test]
    fn accepts_config_and_level() {
        let args =
            CliArgs::parse_from(["tickwatch", "--config", "dev/watch.toml", "--log-level", "debug"]);
        assert_eq!(args.config, "dev/watch.toml");
        assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    }
}
