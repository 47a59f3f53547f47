//! Recording UI for tests.
//!
//! [`MockUI`] keeps every call as a [`UiEvent`] in one ordered log, so tests
//! can check both what was shown and in which order. Spinners write their
//! outcome into the same log.
//!
//! # Example
//!
//! ```
//! use teamified::ui::{MockUI, SpinnerStatus, UiEvent, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.info("Detected platform: Linux");
//! ui.start_spinner("Installing Git...").finish_success("Git installed");
//!
//! assert!(ui.has_info("Linux"));
//! assert_eq!(
//!     ui.events().last(),
//!     Some(&UiEvent::SpinnerFinished(SpinnerStatus::Success, "Git installed".into()))
//! );
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, UserInterface};
use crate::shell::OutputLine;

/// One recorded interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Message(String),
    Info(String),
    Success(String),
    Warning(String),
    Error(String),
    Header(String),
    Progress(usize, usize),
    SpinnerStarted(String),
    SpinnerMessage(String),
    SpinnerFinished(SpinnerStatus, String),
    ErrorBlock { command: String, output: String },
    CommandOutput(OutputLine),
}

/// How a spinner was finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    Success,
    Error,
    Skipped,
}

type EventLog = Rc<RefCell<Vec<UiEvent>>>;

/// A [`UserInterface`] that records instead of printing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    events: EventLog,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Every recorded event, oldest first.
    pub fn events(&self) -> Vec<UiEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&mut self) {
        self.events.borrow_mut().clear();
    }

    fn record(&self, event: UiEvent) {
        self.events.borrow_mut().push(event);
    }

    fn collect<T>(&self, pick: impl Fn(&UiEvent) -> Option<T>) -> Vec<T> {
        self.events.borrow().iter().filter_map(pick).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Message(m) => Some(m.clone()),
            _ => None,
        })
    }

    pub fn infos(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Info(m) => Some(m.clone()),
            _ => None,
        })
    }

    pub fn successes(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Success(m) => Some(m.clone()),
            _ => None,
        })
    }

    pub fn warnings(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Warning(m) => Some(m.clone()),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Error(m) => Some(m.clone()),
            _ => None,
        })
    }

    pub fn headers(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::Header(m) => Some(m.clone()),
            _ => None,
        })
    }

    pub fn progress(&self) -> Vec<(usize, usize)> {
        self.collect(|e| match e {
            UiEvent::Progress(current, total) => Some((*current, *total)),
            _ => None,
        })
    }

    /// Spinner outcomes, in finish order.
    pub fn spinner_results(&self) -> Vec<(SpinnerStatus, String)> {
        self.collect(|e| match e {
            UiEvent::SpinnerFinished(status, m) => Some((*status, m.clone())),
            _ => None,
        })
    }

    /// Intermediate spinner messages, in order.
    pub fn spinner_messages(&self) -> Vec<String> {
        self.collect(|e| match e {
            UiEvent::SpinnerMessage(m) => Some(m.clone()),
            _ => None,
        })
    }

    /// Streamed child output, in arrival order.
    pub fn command_output_lines(&self) -> Vec<OutputLine> {
        self.collect(|e| match e {
            UiEvent::CommandOutput(line) => Some(line.clone()),
            _ => None,
        })
    }

    /// Error blocks as (command, output).
    pub fn error_blocks(&self) -> Vec<(String, String)> {
        self.collect(|e| match e {
            UiEvent::ErrorBlock { command, output } => Some((command.clone(), output.clone())),
            _ => None,
        })
    }

    pub fn has_message(&self, needle: &str) -> bool {
        self.messages().iter().any(|m| m.contains(needle))
    }

    pub fn has_info(&self, needle: &str) -> bool {
        self.infos().iter().any(|m| m.contains(needle))
    }

    pub fn has_success(&self, needle: &str) -> bool {
        self.successes().iter().any(|m| m.contains(needle))
    }

    pub fn has_warning(&self, needle: &str) -> bool {
        self.warnings().iter().any(|m| m.contains(needle))
    }

    pub fn has_error(&self, needle: &str) -> bool {
        self.errors().iter().any(|m| m.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.record(UiEvent::Message(msg.to_string()));
    }

    fn info(&mut self, msg: &str) {
        self.record(UiEvent::Info(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.record(UiEvent::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.record(UiEvent::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.record(UiEvent::Error(msg.to_string()));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.record(UiEvent::SpinnerStarted(message.to_string()));
        Box::new(MockSpinner {
            log: Rc::clone(&self.events),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.record(UiEvent::Header(title.to_string()));
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        self.record(UiEvent::Progress(current, total));
    }

    fn show_error_block(&mut self, command: &str, output: &str) {
        self.record(UiEvent::ErrorBlock {
            command: command.to_string(),
            output: output.to_string(),
        });
    }

    // Recorded whatever the mode, so tests see what a verbose run would print.
    fn command_output(&mut self, line: &OutputLine) {
        self.record(UiEvent::CommandOutput(line.clone()));
    }
}

/// Spinner handed out by [`MockUI`]; writes its outcome into the UI's log.
#[derive(Debug)]
pub struct MockSpinner {
    log: EventLog,
}

impl MockSpinner {
    fn finish(&mut self, status: SpinnerStatus, msg: &str) {
        self.log
            .borrow_mut()
            .push(UiEvent::SpinnerFinished(status, msg.to_string()));
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.log
            .borrow_mut()
            .push(UiEvent::SpinnerMessage(msg.to_string()));
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Success, msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Error, msg);
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.finish(SpinnerStatus::Skipped, msg);
    }
}
