// src/exec/backend.rs

//! Pluggable entry-point runner.
//!
//! The watch loop talks to a `CommandRunner` instead of spawning processes
//! itself. Production code uses [`ShellCommandRunner`]; tests provide a fake
//! that records invocations and returns canned reports.

use std::future::Future;
use std::pin::Pin;

use anyhow::Result;

use super::command::{run_shell_command, CommandReport};

/// Trait abstracting how the entry point is executed.
///
/// The returned future must run the command to completion; the loop awaits
/// it before looking at the filesystem again.
pub trait CommandRunner: Send {
    fn run<'a>(
        &'a mut self,
        cmd: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<CommandReport>> + Send + 'a>>;
}

/// Runs the entry point through `sh -c` (or `cmd /C` on Windows).
#[derive(Debug, Clone, Default)]
pub struct ShellCommandRunner;

impl ShellCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run<'a>(
        &'a mut self,
        cmd: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<CommandReport>> + Send + 'a>> {
        Box::pin(run_shell_command(cmd))
    }
}
