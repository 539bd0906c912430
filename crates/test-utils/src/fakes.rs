use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tickwatch::engine::{ChangeEvent, ChangeKind};
use tickwatch::exec::{CommandReport, CommandRunner};
use tickwatch::report::ChangeNotifier;

/// A fake runner that:
/// - records every command it was asked to run
/// - immediately returns a canned successful report (or an error when
///   `failing` is set).
#[derive(Debug, Clone, Default)]
pub struct FakeRunner {
    pub commands: Arc<Mutex<Vec<String>>>,
    pub failing: bool,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn runs(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run<'a>(
        &'a mut self,
        cmd: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<CommandReport>> + Send + 'a>> {
        let commands = Arc::clone(&self.commands);
        let failing = self.failing;

        Box::pin(async move {
            commands.lock().unwrap().push(cmd.to_string());
            if failing {
                anyhow::bail!("fake runner refused to run '{cmd}'");
            }
            Ok(CommandReport {
                output: format!("ran {cmd}\n"),
                elapsed: Duration::from_millis(1),
                exit_code: Some(0),
            })
        })
    }
}

/// Everything a `RecordingNotifier` was shown, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Startup,
    Change(ChangeKind, String),
    Finished(String),
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.notices.lock().unwrap().clear();
    }
}

impl ChangeNotifier for RecordingNotifier {
    fn startup(&mut self) -> io::Result<()> {
        self.notices.lock().unwrap().push(Notice::Startup);
        Ok(())
    }

    fn change(&mut self, event: &ChangeEvent) -> io::Result<()> {
        let path = event.file.path().to_string_lossy().replace('\\', "/");
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Change(event.kind, path));
        Ok(())
    }

    fn command_finished(&mut self, report: &CommandReport) -> io::Result<()> {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Finished(report.output.clone()));
        Ok(())
    }
}
