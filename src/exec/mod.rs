// src/exec/mod.rs

//! Entry-point execution layer.
//!
//! - [`command`] runs a shell command to completion and captures its output.
//! - [`backend`] defines the [`CommandRunner`] seam the watch loop talks to,
//!   so tests can swap in a fake runner.

pub mod backend;
pub mod command;

pub use backend::{CommandRunner, ShellCommandRunner};
pub use command::{run_shell_command, CommandReport};
