//! Shell command execution.

pub mod command;
pub mod platform;
pub mod runner;

pub use command::{execute, execute_streaming, CommandResult, OutputLine};
pub use platform::is_ci;
pub use runner::{CommandRunner, RecordingRunner, SystemRunner};
