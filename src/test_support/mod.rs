//! Test utilities and mocks for xcmeta unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use xcmeta::test_support::{MockExecutor, MockProcessOutput};
//!
//! #[test]
//! fn test_example() {
//!     let exec = Arc::new(MockExecutor::new());
//!     exec.expect_contains("-list", MockProcessOutput::success("Schemes:\n    App\n"));
//!
//!     // Hand `exec.clone()` to Project::with_runner, then inspect exec.calls()
//! }
//! ```

pub mod fixtures;

use std::io;
use std::process::{ExitStatus, Output};
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{bail, Result};

use crate::util::process::{CommandRunner, ProcessBuilder};

/// Mock process output for testing command execution.
#[derive(Debug, Clone)]
pub struct MockProcessOutput {
    /// Exit status code (0 = success).
    pub status: i32,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
}

impl MockProcessOutput {
    /// Create a successful output with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        MockProcessOutput {
            status: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Create a failure output with the given stderr and status code.
    pub fn failure(status: i32, stderr: impl Into<String>) -> Self {
        MockProcessOutput {
            status,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Convert into the `Output` a real process would produce.
    pub fn to_output(&self) -> Output {
        Output {
            status: exit_status(self.status),
            stdout: self.stdout.clone().into_bytes(),
            stderr: self.stderr.clone().into_bytes(),
        }
    }
}

#[cfg(unix)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

/// Pattern for matching commands in MockExecutor.
#[derive(Debug, Clone)]
pub enum CommandPattern {
    /// Exact match on full command string.
    Exact(String),
    /// Match if command contains substring.
    Contains(String),
}

impl CommandPattern {
    /// Check if this pattern matches the given command.
    pub fn matches(&self, cmd: &str) -> bool {
        match self {
            CommandPattern::Exact(s) => cmd == s,
            CommandPattern::Contains(s) => cmd.contains(s),
        }
    }
}

/// Expectation for a command execution.
#[derive(Debug, Clone)]
pub struct CommandExpectation {
    /// Pattern to match against commands.
    pub pattern: CommandPattern,
    /// Output to return when matched.
    pub output: MockProcessOutput,
}

#[derive(Debug, Default)]
struct MockState {
    expectations: Vec<CommandExpectation>,
    calls: Vec<String>,
    default_output: Option<MockProcessOutput>,
}

/// Mock process executor for testing command execution.
///
/// Records every command it is asked to run and answers from the first
/// matching expectation. Shared through an `Arc`, so all methods take
/// `&self`.
#[derive(Debug, Default)]
pub struct MockExecutor {
    state: Mutex<MockState>,
}

impl MockExecutor {
    /// Create a new mock executor.
    pub fn new() -> Self {
        MockExecutor::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, pattern: CommandPattern, output: MockProcessOutput) -> &Self {
        self.state()
            .expectations
            .push(CommandExpectation { pattern, output });
        self
    }

    /// Add an expectation for an exact command match.
    pub fn expect(&self, cmd: &str, output: MockProcessOutput) -> &Self {
        self.push(CommandPattern::Exact(cmd.to_string()), output)
    }

    /// Add an expectation for a command containing a substring.
    pub fn expect_contains(&self, substring: &str, output: MockProcessOutput) -> &Self {
        self.push(CommandPattern::Contains(substring.to_string()), output)
    }

    /// Set a default output for commands that don't match any expectation.
    pub fn set_default(&self, output: MockProcessOutput) -> &Self {
        self.state().default_output = Some(output);
        self
    }

    /// Execute a command line and return the mock output.
    pub fn run_line(&self, full_cmd: &str) -> Result<MockProcessOutput> {
        let mut state = self.state();
        state.calls.push(full_cmd.to_string());

        if let Some(exp) = state
            .expectations
            .iter()
            .find(|exp| exp.pattern.matches(full_cmd))
        {
            return Ok(exp.output.clone());
        }

        if let Some(ref default) = state.default_output {
            return Ok(default.clone());
        }

        bail!("unexpected command: {}", full_cmd)
    }

    /// Get all commands that were called.
    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }
}

impl CommandRunner for MockExecutor {
    fn run(&self, cmd: &ProcessBuilder) -> Result<Output> {
        self.run_line(&cmd.display_command())
            .map(|out| out.to_output())
    }
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that records every event, and return the
/// formatted log text.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap_or_else(|e| e.into_inner()).clone();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_matching_expectation_wins() {
        let exec = MockExecutor::new();
        exec.expect("xcrun xcodebuild -list", MockProcessOutput::success("exact"));
        exec.expect_contains("-list", MockProcessOutput::success("contains"));

        let exact = exec
            .run(&ProcessBuilder::new("xcrun").args(["xcodebuild", "-list"]))
            .unwrap();
        let contains = exec
            .run(&ProcessBuilder::new("xcodebuild").arg("-list"))
            .unwrap();

        assert_eq!(exact.stdout, b"exact");
        assert_eq!(contains.stdout, b"contains");
        assert_eq!(
            exec.calls(),
            vec!["xcrun xcodebuild -list", "xcodebuild -list"]
        );
    }

    #[test]
    fn test_default_and_unexpected() {
        let exec = MockExecutor::new();
        assert!(exec.run_line("xcodebuild -version").is_err());

        exec.set_default(MockProcessOutput::failure(65, "boom"));
        let out = exec.run(&ProcessBuilder::new("xcodebuild")).unwrap();
        assert!(!out.status.success());
        assert_eq!(out.status.code(), Some(65));
        assert_eq!(out.stderr, b"boom");
        assert!(out.stdout.is_empty());
    }

    #[test]
    fn test_capture_logs() {
        let logs = capture_logs(|| {
            tracing::warn!("something happened");
        });
        assert!(logs.contains("WARN"));
        assert!(logs.contains("something happened"));
    }
}
