//! Tool installation.
//!
//! A single [`Installer`] drives every platform. Platform differences live
//! in a [`PackageManagerAdapter`], chosen by [`adapter_for`] from the
//! detected [`PlatformContext`](crate::detection::PlatformContext).
//!
//! A run is strictly sequential:
//!
//! 1. the adapter's bootstrap commands
//! 2. for each configured tool, in [`Tool::ALL`] order, its install
//!    commands followed by its post-install configuration
//!
//! Child output is handed to [`UserInterface::command_output`] line by line;
//! the UI decides whether to show it.
//!
//! Any failing command of a required tool aborts the run. Optional tools
//! run unchecked; a failure there skips the rest of that tool only.

pub mod adapter;
pub mod linux;
pub mod macos;
pub mod tool;
pub mod windows;

pub use adapter::{
    adapter_for, configure_steps, playwright_commands, ConfigureStep, PackageManagerAdapter,
};
pub use linux::LinuxAdapter;
pub use macos::{MacOsAdapter, HOMEBREW_BOOTSTRAP};
pub use tool::Tool;
pub use windows::{WindowsAdapter, CHOCOLATEY_BOOTSTRAP};

use crate::config::{SetupConfig, ToolSpec};
use crate::error::Result;
use crate::shell::CommandRunner;
use crate::ui::{SpinnerHandle, UserInterface};

/// Outcome of a completed run, by tool display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub installed: Vec<String>,
    pub skipped: Vec<String>,
    pub failed_optional: Vec<String>,
}

/// Installs the configured tools through a package manager adapter.
pub struct Installer<'a> {
    config: &'a SetupConfig,
    adapter: Box<dyn PackageManagerAdapter>,
    runner: &'a dyn CommandRunner,
}

impl<'a> Installer<'a> {
    pub fn new(
        config: &'a SetupConfig,
        adapter: Box<dyn PackageManagerAdapter>,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            config,
            adapter,
            runner,
        }
    }

    pub fn adapter(&self) -> &dyn PackageManagerAdapter {
        self.adapter.as_ref()
    }

    /// Configured tools in installation order.
    pub fn planned_tools(&self) -> Vec<(Tool, &'a ToolSpec)> {
        Tool::ALL
            .into_iter()
            .filter_map(|tool| self.config.tool(tool.id()).map(|spec| (tool, spec)))
            .collect()
    }

    /// Configuration keys that name no known tool.
    pub fn unknown_tools(&self) -> Vec<&'a str> {
        self.config
            .tools
            .keys()
            .filter(|id| Tool::from_id(id).is_none())
            .map(|id| id.as_str())
            .collect()
    }

    /// Install every configured tool.
    ///
    /// # Errors
    ///
    /// Returns the first `CommandFailed` of a bootstrap command or of a
    /// required tool. Nothing after it runs.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<InstallReport> {
        ui.info(&format!("Starting {} setup...", self.adapter.name()));

        for id in self.unknown_tools() {
            tracing::warn!(tool = id, "unknown tool in configuration");
            ui.warning(&format!("Unknown tool '{}' in configuration, skipping", id));
        }

        let bootstrap = self.adapter.bootstrap();
        if !bootstrap.is_empty() {
            let mut spinner = ui.start_spinner("Installing package manager...");
            for command in &bootstrap {
                if let Err(e) = self.run_step(command, true, ui) {
                    spinner.finish_error("Package manager installation failed");
                    return Err(e);
                }
            }
            spinner.finish_success("Package manager installed");
        }

        let planned = self.planned_tools();
        let total = planned.len();
        let mut report = InstallReport::default();

        for (index, (tool, spec)) in planned.into_iter().enumerate() {
            ui.show_progress(index + 1, total);
            let mut spinner = ui.start_spinner(&format!("Installing {}...", spec.name));

            let Some(commands) = self.adapter.install(tool, spec) else {
                tracing::warn!(%tool, adapter = %self.adapter.name(), "no install recipe");
                spinner.finish_skipped(&format!("{} skipped", spec.name));
                ui.warning(&format!(
                    "No installation method for {} on {}",
                    spec.name,
                    self.adapter.name()
                ));
                report.skipped.push(spec.name.clone());
                continue;
            };

            match self.run_tool(tool, spec, &commands, ui, spinner.as_mut()) {
                Ok(()) => {
                    spinner.finish_success(&format!("{} installed", spec.name));
                    if tool == Tool::Git && !spec.config.is_empty() {
                        ui.success("Git configured successfully");
                    }
                    report.installed.push(spec.name.clone());
                }
                Err(e) if !spec.required => {
                    tracing::warn!(%tool, error = %e, "optional tool failed");
                    spinner.finish_skipped(&format!("{} not installed (optional)", spec.name));
                    ui.warning(&format!(
                        "Optional tool {} failed to install: {}",
                        spec.name, e
                    ));
                    report.failed_optional.push(spec.name.clone());
                }
                Err(e) => {
                    spinner.finish_error(&format!("{} failed", spec.name));
                    return Err(e);
                }
            }
        }

        ui.success(&format!("{} setup completed!", self.adapter.name()));
        Ok(report)
    }

    /// Install commands, then each configuration step under its own label.
    fn run_tool(
        &self,
        tool: Tool,
        spec: &ToolSpec,
        install: &[String],
        ui: &mut dyn UserInterface,
        spinner: &mut dyn SpinnerHandle,
    ) -> Result<()> {
        for command in install {
            self.run_step(command, spec.required, ui)?;
        }
        for step in configure_steps(tool, spec) {
            spinner.set_message(&step.label);
            self.run_step(&step.command, spec.required, ui)?;
        }
        Ok(())
    }

    fn run_step(&self, command: &str, check: bool, ui: &mut dyn UserInterface) -> Result<()> {
        self.runner
            .run_with_output(command, check, &mut |line| ui.command_output(&line))?
            .into_checked(command)?;
        Ok(())
    }
}
