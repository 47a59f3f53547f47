//! Teamified - development environment setup for the ATS Teamified template.
//!
//! Two programs share this library:
//!
//! - `teamified-setup` detects the host platform and installs the team's
//!   tools (Git, VS Code, Docker, Node.js, Python, Playwright, Postman)
//!   through the native package manager.
//! - `teamified-docs` serves the template's documentation over HTTP.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Setup configuration loading and defaults
//! - [`detection`] - Operating system, distribution and package manager detection
//! - [`docs`] - Documentation server routes
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Per-platform install recipes and the install loop
//! - [`orchestrator`] - The top-level setup flow
//! - [`shell`] - Shell command execution
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use teamified::detection::{MockProbe, OsFamily, PlatformContext};
//! use teamified::installer::adapter_for;
//!
//! let probe = MockProbe::with_commands(&["brew"]);
//! let ctx = PlatformContext::detect(OsFamily::MacOs, &probe);
//! assert_eq!(adapter_for(&ctx).name(), "macOS (Homebrew)");
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod docs;
pub mod error;
pub mod installer;
pub mod orchestrator;
pub mod shell;
pub mod ui;

pub use error::{Result, TeamifiedError};
