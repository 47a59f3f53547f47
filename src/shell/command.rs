//! Process spawning for install commands.
//!
//! Every command goes through the platform shell (`sh -c`, or `cmd /C` on
//! Windows) so recipes can use pipes and `&&`. Output is always captured;
//! streaming additionally hands each line to a callback as it arrives.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::{Result, TeamifiedError};

/// Outcome of one command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code, `None` when killed by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
    pub success: bool,
}

impl CommandResult {
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    fn from_status(status: ExitStatus, stdout: String, stderr: String, started: Instant) -> Self {
        if status.success() {
            Self::success(stdout, stderr, started.elapsed())
        } else {
            Self::failure(status.code(), stdout, stderr, started.elapsed())
        }
    }

    /// Convert a non-zero exit into [`TeamifiedError::CommandFailed`].
    pub fn into_checked(self, command: &str) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(TeamifiedError::CommandFailed {
                command: command.to_string(),
                code: self.exit_code,
                stderr: self.stderr,
            })
        }
    }
}

/// One line of child output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Stdout(String),
    Stderr(String),
}

/// Run `command` and wait for it, capturing both streams.
///
/// A non-zero exit is reported through [`CommandResult::success`]. Only a
/// failure to spawn the shell is an `Err`.
pub fn execute(command: &str, cwd: Option<&Path>) -> Result<CommandResult> {
    let started = Instant::now();
    let output = shell(command, cwd)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| spawn_failure(command, e))?;

    Ok(CommandResult::from_status(
        output.status,
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
        started,
    ))
}

/// Run `command`, passing each output line to `on_line` as it arrives.
///
/// Lines are still collected into the returned [`CommandResult`].
pub fn execute_streaming<F>(
    command: &str,
    cwd: Option<&Path>,
    mut on_line: F,
) -> Result<CommandResult>
where
    F: FnMut(OutputLine),
{
    let started = Instant::now();
    let mut child = shell(command, cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| spawn_failure(command, e))?;

    let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
        return Err(spawn_failure(
            command,
            std::io::Error::other("output pipes unavailable"),
        ));
    };

    let (tx, rx) = mpsc::channel();
    let out = pump(stdout, tx.clone(), OutputLine::Stdout);
    let err = pump(stderr, tx, OutputLine::Stderr);

    // Ends once both pumps have dropped their senders.
    for line in rx {
        on_line(line);
    }

    let stdout = out.join().unwrap_or_default();
    let stderr = err.join().unwrap_or_default();
    let status = child.wait().map_err(|e| spawn_failure(command, e))?;

    Ok(CommandResult::from_status(status, stdout, stderr, started))
}

fn pump<R>(
    stream: R,
    tx: Sender<OutputLine>,
    wrap: fn(String) -> OutputLine,
) -> JoinHandle<String>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut collected = String::new();
        for line in BufReader::new(stream).lines().map_while(std::result::Result::ok) {
            collected.push_str(&line);
            collected.push('\n');
            let _ = tx.send(wrap(line));
        }
        collected
    })
}

fn shell(command: &str, cwd: Option<&Path>) -> Command {
    let (program, flag) = if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    };

    let mut cmd = Command::new(program);
    cmd.arg(flag).arg(command);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }
    cmd
}

fn spawn_failure(command: &str, err: std::io::Error) -> TeamifiedError {
    TeamifiedError::CommandFailed {
        command: command.to_string(),
        code: None,
        stderr: err.to_string(),
    }
}
