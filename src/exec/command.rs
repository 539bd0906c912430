// src/exec/command.rs

use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::process::Command;
use tokio::time::Instant;
use tracing::{debug, info};

/// What a finished entry-point run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReport {
    /// Stdout followed by stderr, lossily decoded.
    pub output: String,
    pub elapsed: Duration,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl CommandReport {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Elapsed wall-clock time in milliseconds, rounded to two decimals.
    pub fn elapsed_ms(&self) -> f64 {
        (self.elapsed.as_secs_f64() * 1000.0 * 100.0).round() / 100.0
    }
}

/// Run `cmd` through the platform shell and wait for it to finish.
///
/// A non-zero exit status is not an error: the report is returned as-is.
/// Only failing to start or wait for the process is.
pub async fn run_shell_command(cmd: &str) -> Result<CommandReport> {
    info!(cmd = %cmd, "running entry point");

    // Build a shell command appropriate for the platform.
    let mut command = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(cmd);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(cmd);
        c
    };

    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let started = Instant::now();
    let output = command
        .output()
        .await
        .with_context(|| format!("running entry point '{cmd}'"))?;
    let elapsed = started.elapsed();

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    let report = CommandReport {
        output: combined,
        elapsed,
        exit_code: output.status.code(),
    };

    debug!(
        cmd = %cmd,
        exit_code = ?report.exit_code,
        elapsed_ms = report.elapsed_ms(),
        bytes = report.output.len(),
        "entry point finished"
    );

    Ok(report)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_stdout_then_stderr() {
        let report = run_shell_command("echo out; echo err >&2").await.unwrap();
        assert_eq!(report.output, "out\nerr\n");
        assert!(report.success());
    }

    #[tokio::test]
    async fn non_zero_exit_is_reported_not_raised() {
        let report = run_shell_command("echo boom; exit 3").await.unwrap();
        assert_eq!(report.exit_code, Some(3));
        assert!(!report.success());
        assert_eq!(report.output, "boom\n");
    }

    #[test]
    fn elapsed_ms_rounds_to_two_decimals() {
        let report = CommandReport {
            output: String::new(),
            elapsed: Duration::from_micros(12_346),
            exit_code: Some(0),
        };
        assert_eq!(report.elapsed_ms(), 12.35);
    }
}
