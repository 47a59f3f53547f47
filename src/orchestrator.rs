//! Top-level setup flow.
//!
//! Loads configuration, identifies the host, builds the matching adapter
//! and drives the [`Installer`] to completion. Host access goes through the
//! injected [`Probe`] and [`CommandRunner`], so a whole run can be simulated.

use std::path::{Path, PathBuf};

use crate::config::{load_config_from, ConfigSource, LoadedConfig};
use crate::detection::{OsFamily, PlatformContext, Probe};
use crate::error::{Result, TeamifiedError};
use crate::installer::{adapter_for, InstallReport, Installer};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

/// Banner shown at the start of a run.
pub const SETUP_BANNER: &str = "Starting Development Environment Setup";

/// Drives one setup run.
pub struct Orchestrator<'a> {
    base_path: PathBuf,
    config_path: Option<PathBuf>,
    os: String,
    probe: &'a dyn Probe,
    runner: &'a dyn CommandRunner,
}

impl<'a> Orchestrator<'a> {
    /// An orchestrator for the running host's operating system.
    pub fn new(base_path: &Path, probe: &'a dyn Probe, runner: &'a dyn CommandRunner) -> Self {
        Self {
            base_path: base_path.to_path_buf(),
            config_path: None,
            os: std::env::consts::OS.to_string(),
            probe,
            runner,
        }
    }

    /// Use an explicit config file instead of discovery.
    pub fn with_config(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Override the operating-system identifier.
    pub fn with_os(mut self, os: &str) -> Self {
        self.os = os.to_string();
        self
    }

    /// Load the configuration for this run.
    pub fn load_config(&self) -> Result<LoadedConfig> {
        load_config_from(&self.base_path, self.config_path.as_deref())
    }

    /// Run setup, returning the install report or the first fatal error.
    ///
    /// # Errors
    ///
    /// - `ConfigParseError`/`ConfigNotFound` before anything is detected
    /// - `UnsupportedPlatform` before any command is issued
    /// - `CommandFailed` from the installer
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<InstallReport> {
        ui.show_header(SETUP_BANNER);

        let loaded = self.load_config()?;
        if let ConfigSource::File(path) = &loaded.source {
            ui.info(&format!("Using configuration from {}", path.display()));
        }

        let os: OsFamily = self.os.parse()?;
        ui.info(&format!("Detected platform: {}", os));

        let ctx = PlatformContext::detect(os, self.probe);
        if let Some(distro) = ctx.distro {
            ui.info(&format!("Detected distribution: {}", distro));
        }
        match ctx.primary_manager() {
            Some(manager) => ui.info(&format!("Using package manager: {}", manager)),
            None => ui.info("No package manager detected"),
        }

        let installer = Installer::new(&loaded.config, adapter_for(&ctx), self.runner);
        installer.run(ui)
    }

    /// Run setup and report the outcome on `ui`. Returns whether it succeeded.
    pub fn run_and_report(&self, ui: &mut dyn UserInterface) -> bool {
        match self.run(ui) {
            Ok(report) => {
                report_success(&report, ui);
                true
            }
            Err(e) => {
                tracing::debug!(error = ?e, "setup failed");
                report_failure(&e, ui);
                false
            }
        }
    }
}

fn report_success(report: &InstallReport, ui: &mut dyn UserInterface) {
    if !report.skipped.is_empty() {
        ui.warning(&format!("Skipped: {}", report.skipped.join(", ")));
    }
    if !report.failed_optional.is_empty() {
        ui.warning(&format!(
            "Optional tools not installed: {}",
            report.failed_optional.join(", ")
        ));
    }
    ui.success("Setup completed successfully!");
}

fn report_failure(error: &TeamifiedError, ui: &mut dyn UserInterface) {
    if let TeamifiedError::CommandFailed { command, stderr, .. } = error {
        ui.show_error_block(command, stderr.trim_end());
    }
    ui.error(&format!("Setup failed: {}", error));
}
