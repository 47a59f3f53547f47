//! Package manager strategy.

use crate::config::ToolSpec;
use crate::detection::{OsFamily, PlatformContext};

use super::linux::LinuxAdapter;
use super::macos::MacOsAdapter;
use super::tool::Tool;
use super::windows::WindowsAdapter;

/// How a host package manager installs tools.
///
/// The [`Installer`](super::Installer) is generic over this trait; each
/// operating-system family provides one implementation.
pub trait PackageManagerAdapter {
    /// Name of the platform setup, e.g. `Linux (apt)`.
    fn name(&self) -> String;

    /// Commands that make the package manager available. Run once, before
    /// any tool.
    fn bootstrap(&self) -> Vec<String>;

    /// Commands installing `tool` with this manager, or `None` when the
    /// manager has no recipe for it.
    fn install_package(&self, tool: Tool, spec: &ToolSpec) -> Option<Vec<String>>;

    /// Commands installing `tool`. Playwright goes through npm on every
    /// platform.
    fn install(&self, tool: Tool, spec: &ToolSpec) -> Option<Vec<String>> {
        match tool {
            Tool::Playwright => Some(playwright_commands(spec)),
            _ => self.install_package(tool, spec),
        }
    }
}

/// npm-based Playwright install, independent of the package manager.
pub fn playwright_commands(spec: &ToolSpec) -> Vec<String> {
    let package = match spec.version.as_deref() {
        Some(version) => format!("@playwright/test@{}", version),
        None => "@playwright/test".to_string(),
    };
    vec![
        format!("npm install -g {}", package),
        "npx playwright install".to_string(),
    ]
}

/// One post-install command and the progress line shown while it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureStep {
    pub label: String,
    pub command: String,
}

/// Post-install configuration for `tool`, in configuration order.
pub fn configure_steps(tool: Tool, spec: &ToolSpec) -> Vec<ConfigureStep> {
    match tool {
        Tool::Git => spec
            .config
            .iter()
            .map(|(key, value)| ConfigureStep {
                label: format!("Setting git {}...", key),
                command: format!("git config --global {} \"{}\"", key, value),
            })
            .collect(),
        Tool::VsCode => spec
            .extensions
            .iter()
            .map(|ext| ConfigureStep {
                label: format!("Installing extension: {}", ext),
                command: format!("code --install-extension {}", ext),
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Build the adapter for a detected platform.
pub fn adapter_for(ctx: &PlatformContext) -> Box<dyn PackageManagerAdapter> {
    match ctx.os {
        OsFamily::Windows => Box::new(WindowsAdapter::from_context(ctx)),
        OsFamily::MacOs => Box::new(MacOsAdapter::from_context(ctx)),
        OsFamily::Linux => Box::new(LinuxAdapter::from_context(ctx)),
    }
}

/// Major release line for version strings like `18.x`, `18` or `18.19.0`.
pub(crate) fn major_version(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{DistroFamily, ManagerKind};

    #[test]
    fn playwright_without_version() {
        let spec = ToolSpec::new("Playwright");
        assert_eq!(
            playwright_commands(&spec),
            vec!["npm install -g @playwright/test", "npx playwright install"]
        );
    }

    #[test]
    fn playwright_with_version() {
        let spec = ToolSpec::new("Playwright").with_version("1.44.0");
        assert_eq!(
            playwright_commands(&spec)[0],
            "npm install -g @playwright/test@1.44.0"
        );
    }

    fn commands(steps: Vec<ConfigureStep>) -> Vec<String> {
        steps.into_iter().map(|s| s.command).collect()
    }

    #[test]
    fn git_settings_keep_configured_order() {
        let spec = ToolSpec::new("Git")
            .with_setting("user.name", "Developer")
            .with_setting("init.defaultBranch", "main");
        assert_eq!(
            commands(configure_steps(Tool::Git, &spec)),
            vec![
                "git config --global user.name \"Developer\"",
                "git config --global init.defaultBranch \"main\"",
            ]
        );
    }

    #[test]
    fn extensions_install_in_listed_order() {
        let spec = ToolSpec::new("Visual Studio Code").with_extensions(&["z.last", "a.first"]);
        let steps = configure_steps(Tool::VsCode, &spec);
        assert_eq!(
            commands(steps.clone()),
            vec![
                "code --install-extension z.last",
                "code --install-extension a.first",
            ]
        );
        assert_eq!(steps[0].label, "Installing extension: z.last");
    }

    #[test]
    fn other_tools_have_no_configuration() {
        let spec = ToolSpec::new("Docker Desktop").with_setting("ignored", "x");
        assert!(configure_steps(Tool::Docker, &spec).is_empty());
    }

    #[test]
    fn adapter_follows_os_family() {
        let linux = PlatformContext {
            os: OsFamily::Linux,
            managers: vec![ManagerKind::Apt],
            distro: Some(DistroFamily::Debian),
        };
        assert_eq!(adapter_for(&linux).name(), "Linux (apt)");

        let mac = PlatformContext {
            os: OsFamily::MacOs,
            managers: vec![ManagerKind::Homebrew],
            distro: None,
        };
        assert_eq!(adapter_for(&mac).name(), "macOS (Homebrew)");

        let windows = PlatformContext {
            os: OsFamily::Windows,
            managers: vec![ManagerKind::Winget],
            distro: None,
        };
        assert_eq!(adapter_for(&windows).name(), "Windows (winget)");
    }

    #[test]
    fn major_version_strips_minor_parts() {
        assert_eq!(major_version("18.x"), "18");
        assert_eq!(major_version("20"), "20");
        assert_eq!(major_version("18.19.0"), "18");
    }
}
