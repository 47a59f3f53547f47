//! Non-interactive UI for CI/headless environments.

use super::theme::SetupTheme;
use super::{OutputMode, SpinnerHandle, UserInterface};
use crate::shell::OutputLine;

/// UI implementation for non-interactive mode.
///
/// When running in CI (detected via `is_ci()`), per-tool counters are
/// suppressed since they add noise to log-based output. Everything else
/// is printed as plain lines.
pub struct NonInteractiveUI {
    mode: OutputMode,
    is_ci: bool,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            is_ci: crate::shell::is_ci(),
        }
    }

    /// Create with explicit CI flag (for testing).
    pub fn with_ci(mode: OutputMode, is_ci: bool) -> Self {
        Self { mode, is_ci }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("ℹ {}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_status() {
            println!("ℹ {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", SetupTheme::plain().format_header(title));
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.is_ci {
            return;
        }
        if self.mode.shows_status() {
            println!("[{}/{}]", current, total);
        }
    }

    fn show_error_block(&mut self, command: &str, output: &str) {
        eprintln!();
        for line in SetupTheme::plain().format_error_block(command, output) {
            eprintln!("{}", line);
        }
    }

    fn command_output(&mut self, line: &OutputLine) {
        if !self.mode.shows_command_output() {
            return;
        }
        match line {
            OutputLine::Stdout(l) => println!("    {}", l),
            OutputLine::Stderr(l) => eprintln!("    {}", l),
        }
    }
}

/// Spinner that prints only its final line.
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    // Log output has no line to redraw.
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("{}", SetupTheme::plain().format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", SetupTheme::plain().format_error(msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        println!("{}", SetupTheme::plain().format_skipped(msg));
    }
}
