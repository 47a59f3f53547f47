//! Command runners used by the installer.
//!
//! The installer never spawns processes directly. It goes through a
//! [`CommandRunner`], so the same install sequence can run against the host
//! ([`SystemRunner`]) or be recorded without side effects
//! ([`RecordingRunner`]) for `--dry-run` and tests.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, TeamifiedError};

use super::command::{execute, execute_streaming, CommandResult, OutputLine};

/// Executes one shell command synchronously.
pub trait CommandRunner {
    /// Run `command` through the platform shell and wait for it to exit.
    ///
    /// Runners that stream pass each output line to `on_line` as it arrives.
    ///
    /// With `check` set, a non-zero exit is returned as
    /// [`TeamifiedError::CommandFailed`] carrying the captured stderr.
    /// Without it, the failed [`CommandResult`] is returned as `Ok`.
    fn run_with_output(
        &self,
        command: &str,
        check: bool,
        on_line: &mut dyn FnMut(OutputLine),
    ) -> Result<CommandResult>;

    /// [`run_with_output`](Self::run_with_output) with output discarded.
    fn run(&self, command: &str, check: bool) -> Result<CommandResult> {
        self.run_with_output(command, check, &mut |_| {})
    }
}

/// Runs commands on the host.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    cwd: Option<PathBuf>,
    stream_output: bool,
}

impl SystemRunner {
    /// Create a runner that captures output silently.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run commands from `dir`.
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    /// Hand child output to the caller's sink as it arrives.
    pub fn streaming(mut self, stream: bool) -> Self {
        self.stream_output = stream;
        self
    }
}

impl CommandRunner for SystemRunner {
    fn run_with_output(
        &self,
        command: &str,
        check: bool,
        on_line: &mut dyn FnMut(OutputLine),
    ) -> Result<CommandResult> {
        tracing::debug!(command, check, "running command");

        let cwd = self.cwd.as_deref();
        let result = if self.stream_output {
            execute_streaming(command, cwd, on_line)?
        } else {
            execute(command, cwd)?
        };

        tracing::debug!(
            command,
            exit_code = ?result.exit_code,
            elapsed_ms = result.duration.as_millis() as u64,
            "command finished"
        );

        if check {
            result.into_checked(command)
        } else {
            Ok(result)
        }
    }
}

/// Records commands instead of executing them.
///
/// Every command is treated as successful unless it contains one of the
/// substrings registered with [`fail_on`](Self::fail_on).
///
/// # Example
///
/// ```
/// use teamified::shell::{CommandRunner, RecordingRunner};
///
/// let runner = RecordingRunner::new().fail_on("gpg --dearmor");
/// assert!(runner.run("sudo apt install -y git", true).is_ok());
/// assert!(runner.run("wget -qO- key | gpg --dearmor > k.gpg", true).is_err());
/// assert_eq!(runner.commands().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RecordingRunner {
    commands: RefCell<Vec<String>>,
    failures: Vec<String>,
}

impl RecordingRunner {
    /// Create a runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any command containing `pattern`.
    pub fn fail_on(mut self, pattern: &str) -> Self {
        self.failures.push(pattern.to_string());
        self
    }

    /// All commands seen so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }

    /// Number of recorded commands containing `needle`.
    pub fn count_containing(&self, needle: &str) -> usize {
        self.commands
            .borrow()
            .iter()
            .filter(|c| c.contains(needle))
            .count()
    }
}

impl CommandRunner for RecordingRunner {
    fn run_with_output(
        &self,
        command: &str,
        check: bool,
        _on_line: &mut dyn FnMut(OutputLine),
    ) -> Result<CommandResult> {
        self.commands.borrow_mut().push(command.to_string());

        if self.failures.iter().any(|p| command.contains(p.as_str())) {
            let stderr = format!("simulated failure: {}", command);
            if check {
                return Err(TeamifiedError::CommandFailed {
                    command: command.to_string(),
                    code: Some(1),
                    stderr,
                });
            }
            return Ok(CommandResult::failure(
                Some(1),
                String::new(),
                stderr,
                Duration::ZERO,
            ));
        }

        Ok(CommandResult::success(
            String::new(),
            String::new(),
            Duration::ZERO,
        ))
    }
}
