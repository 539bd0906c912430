// src/report.rs

//! Console presentation of change events and entry-point runs.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use console::{style, Term};

use crate::engine::{ChangeEvent, ChangeKind};
use crate::exec::CommandReport;
use crate::watch::path_utils::relative_str;

pub const HEADER: &str = "tickwatch · Watch";

/// Receives everything the user gets to see.
pub trait ChangeNotifier: Send {
    /// Shown once, when the first snapshot has been captured.
    fn startup(&mut self) -> io::Result<()>;

    /// Shown for every change event, right before the entry point runs.
    fn change(&mut self, event: &ChangeEvent) -> io::Result<()>;

    /// Shown after the entry point finished.
    fn command_finished(&mut self, report: &CommandReport) -> io::Result<()>;
}

/// Writes to stdout. The screen is only cleared when stdout is a terminal,
/// so redirected output stays a plain log.
///
/// Paths are shown relative to `root`, the directory the configured
/// directories are resolved against.
#[derive(Debug, Clone)]
pub struct ConsoleNotifier {
    term: Term,
    root: PathBuf,
}

impl ConsoleNotifier {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            term: Term::stdout(),
            root: root.into(),
        }
    }

    fn clear_and_header(&self) -> io::Result<()> {
        if self.term.is_term() {
            self.term.clear_screen()?;
        }
        self.term.write_line(&style(HEADER).bold().to_string())
    }
}

impl ChangeNotifier for ConsoleNotifier {
    fn startup(&mut self) -> io::Result<()> {
        self.clear_and_header()
    }

    fn change(&mut self, event: &ChangeEvent) -> io::Result<()> {
        self.clear_and_header()?;
        self.term.write_line("")?;
        self.term.write_line(&render_change_line(&self.root, event))
    }

    fn command_finished(&mut self, report: &CommandReport) -> io::Result<()> {
        self.term.write_line(&render_command_report(report))
    }
}

/// `[Modified] src/a.php @ 2024-05-01 13:37:00`, with the tag coloured by kind.
///
/// Files outside `root` are printed with their full path.
pub fn render_change_line(root: &Path, event: &ChangeEvent) -> String {
    let tag = format!("[{}]", event.kind);
    let tag = match event.kind {
        ChangeKind::Added => style(tag).green(),
        ChangeKind::Modified => style(tag).yellow(),
        ChangeKind::Removed => style(tag).red(),
    };
    format!(
        "{} {} @ {}",
        tag,
        relative_str(root, event.file.path())
            .unwrap_or_else(|| event.file.path().display().to_string()),
        format_timestamp(event.file.modified())
    )
}

pub fn render_command_report(report: &CommandReport) -> String {
    format!(
        "\n{} {}ms\n\n{}",
        style("[Debug]").dim(),
        report.elapsed_ms(),
        report.output
    )
}

/// Local time as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watch::WatchedFile;
    use std::time::Duration;

    #[test]
    fn change_line_has_kind_path_and_time() {
        let modified = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let event = ChangeEvent::new(
            ChangeKind::Removed,
            WatchedFile::new("/home/dev/proj/src/a.php", modified),
        );

        let line = console::strip_ansi_codes(&render_change_line(Path::new("/home/dev/proj"), &event))
            .into_owned();
        assert_eq!(
            line,
            format!("[Removed] src/a.php @ {}", format_timestamp(modified))
        );
    }

    #[test]
    fn change_line_keeps_full_path_outside_root() {
        let event = ChangeEvent::new(
            ChangeKind::Added,
            WatchedFile::new("/elsewhere/b.php", SystemTime::UNIX_EPOCH),
        );

        let line = console::strip_ansi_codes(&render_change_line(Path::new("/home/dev/proj"), &event))
            .into_owned();
        assert!(line.starts_with("[Added] /elsewhere/b.php @ "), "{line}");
    }

    #[test]
    fn timestamp_has_fixed_shape() {
        let ts = format_timestamp(SystemTime::UNIX_EPOCH + Duration::from_secs(86_400 * 365));
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[13..14], ":");
    }

    #[test]
    fn command_report_shows_time_then_output() {
        let report = CommandReport {
            output: "hello\n".to_string(),
            elapsed: Duration::from_millis(5),
            exit_code: Some(1),
        };
        let text = console::strip_ansi_codes(&render_command_report(&report)).into_owned();
        assert_eq!(text, "\n[Debug] 5ms\n\nhello\n");
    }
}
