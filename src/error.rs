//! Error types for Teamified operations.
//!
//! This module defines [`TeamifiedError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `TeamifiedError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `TeamifiedError::Other`) for unexpected errors
//! - Every failure is fail-fast; nothing in the crate retries

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Teamified operations.
#[derive(Debug, Error)]
pub enum TeamifiedError {
    /// The host operating system has no installer.
    #[error("Unsupported platform: {os}")]
    UnsupportedPlatform { os: String },

    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Shell command exited non-zero (or could not be spawned).
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TeamifiedError {
    /// Captured standard error of a failed command, if any.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { stderr, .. } if !stderr.trim().is_empty() => Some(stderr),
            _ => None,
        }
    }
}

/// Result type alias for Teamified operations.
pub type Result<T> = std::result::Result<T, TeamifiedError>;
