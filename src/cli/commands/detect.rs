//! Detect command implementation.
//!
//! The `teamified-setup detect` command reports what setup would see on
//! this machine without changing anything.

use crate::detection::{command_version, OsFamily, PlatformContext, Probe, SystemProbe};
use crate::error::Result;
use crate::installer::Tool;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The detect command implementation.
pub struct DetectCommand {
    probe: Box<dyn Probe>,
    os: String,
}

impl DetectCommand {
    /// Create a detect command for the running host.
    pub fn new() -> Self {
        Self::with_probe(Box::new(SystemProbe::new()), std::env::consts::OS)
    }

    /// Create a detect command over an arbitrary probe and OS identifier.
    pub fn with_probe(probe: Box<dyn Probe>, os: &str) -> Self {
        Self {
            probe,
            os: os.to_string(),
        }
    }
}

impl Default for DetectCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for DetectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let os: OsFamily = match self.os.parse() {
            Ok(os) => os,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };
        let ctx = PlatformContext::detect(os, self.probe.as_ref());

        ui.message(&format!("Platform:         {}", ctx.os));
        if let Some(distro) = ctx.distro {
            ui.message(&format!("Distribution:     {}", distro));
        }
        let managers = if ctx.managers.is_empty() {
            "none".to_string()
        } else {
            ctx.managers
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        ui.message(&format!("Package managers: {}", managers));
        ui.message("");

        for tool in Tool::ALL {
            let binary = tool.probe_binary();
            let status = if self.probe.has_command(binary) {
                match command_version(binary) {
                    Some(version) => format!("installed ({})", version),
                    None => "installed".to_string(),
                }
            } else {
                "missing".to_string()
            };
            ui.message(&format!("  {:<12} {}", tool.id(), status));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{DistroFamily, MockProbe};
    use crate::ui::MockUI;

    #[test]
    fn reports_linux_platform() {
        let probe = MockProbe::with_commands(&["apt", "snap"]).distro(DistroFamily::Debian);
        let cmd = DetectCommand::with_probe(Box::new(probe), "linux");
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Linux"));
        assert!(ui.has_message("debian"));
        assert!(ui.has_message("Package managers: apt"));
        assert!(ui.has_message("postman"));
        assert!(ui.has_message("missing"));
    }

    #[test]
    fn windows_lists_every_manager() {
        let probe = MockProbe::with_commands(&["choco", "winget"]);
        let cmd = DetectCommand::with_probe(Box::new(probe), "windows");
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("Package managers: Chocolatey, winget"));
    }

    #[test]
    fn reports_no_manager() {
        let cmd = DetectCommand::with_probe(Box::new(MockProbe::with_commands(&[])), "darwin");
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("macOS"));
        assert!(ui.has_message("Package managers: none"));
        assert!(!ui.has_message("Distribution"));
    }

    #[test]
    fn unsupported_os_fails() {
        let cmd = DetectCommand::with_probe(Box::new(MockProbe::with_commands(&[])), "plan9");
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("plan9"));
    }
}
