//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands (`run`, `config`, `detect`, `completions`) to their
//! implementations. Running with no subcommand is the same as `run`.

pub mod completions;
pub mod config;
pub mod detect;
pub mod dispatcher;
pub mod run;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
