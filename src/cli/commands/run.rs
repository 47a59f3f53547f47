//! Run command implementation.
//!
//! The `teamified-setup run` command installs the configured tools.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::detection::SystemProbe;
use crate::error::Result;
use crate::orchestrator::Orchestrator;
use crate::shell::{RecordingRunner, SystemRunner};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }

    fn dry_run(&self, probe: &SystemProbe, ui: &mut dyn UserInterface) -> bool {
        let runner = RecordingRunner::new();
        let ok = Orchestrator::new(&self.project_root, probe, &runner)
            .with_config(self.config_path.clone())
            .run_and_report(ui);

        let commands = runner.commands();
        if commands.is_empty() {
            ui.message("Nothing would be run.");
        } else {
            ui.message("");
            ui.message("Commands that would run:");
            for (i, command) in commands.iter().enumerate() {
                ui.message(&format!("  {:>2}. {}", i + 1, command));
            }
        }
        ok
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let probe = SystemProbe::new();

        let ok = if self.args.dry_run {
            tracing::debug!("dry run, commands will be recorded only");
            self.dry_run(&probe, ui)
        } else {
            let runner = SystemRunner::new()
                .in_dir(&self.project_root)
                .streaming(ui.output_mode() == OutputMode::Verbose);
            Orchestrator::new(&self.project_root, &probe, &runner)
                .with_config(self.config_path.clone())
                .run_and_report(ui)
        };

        if ok {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn malformed_config_fails_with_exit_one() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("broken.yml");
        fs::write(&config, "tools: [not: a map").unwrap();

        let cmd = RunCommand::new(temp.path(), Some(config), RunArgs { dry_run: true });
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Setup failed"));
        assert!(ui.has_message("Nothing would be run."));
    }
}
