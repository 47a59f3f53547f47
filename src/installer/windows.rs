//! Windows: Chocolatey or winget.

use crate::config::ToolSpec;
use crate::detection::{ManagerKind, PlatformContext};

use super::adapter::PackageManagerAdapter;
use super::tool::Tool;

const DEFAULT_PYTHON: &str = "3.11";

/// PowerShell one-liner installing Chocolatey.
pub const CHOCOLATEY_BOOTSTRAP: &str = "powershell -Command \"Set-ExecutionPolicy Bypass -Scope Process -Force; \
[System.Net.ServicePointManager]::SecurityProtocol = \
[System.Net.ServicePointManager]::SecurityProtocol -bor 3072; \
iex ((New-Object System.Net.WebClient).DownloadString('https://community.chocolatey.org/install.ps1'))\"";

/// Installs through Chocolatey when present, winget otherwise. With neither
/// available, Chocolatey is bootstrapped first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowsAdapter {
    manager: ManagerKind,
    needs_bootstrap: bool,
}

impl WindowsAdapter {
    pub fn from_context(ctx: &PlatformContext) -> Self {
        match ctx.primary_manager() {
            Some(manager) => Self {
                manager,
                needs_bootstrap: false,
            },
            None => Self {
                manager: ManagerKind::Chocolatey,
                needs_bootstrap: true,
            },
        }
    }

    pub fn manager(&self) -> ManagerKind {
        self.manager
    }

    fn package_id(tool: Tool, spec: &ToolSpec, manager: ManagerKind) -> Option<String> {
        let id = match (manager, tool) {
            (ManagerKind::Chocolatey, Tool::Git) => "git".to_string(),
            (ManagerKind::Chocolatey, Tool::VsCode) => "vscode".to_string(),
            (ManagerKind::Chocolatey, Tool::Docker) => "docker-desktop".to_string(),
            (ManagerKind::Chocolatey, Tool::NodeJs) => "nodejs".to_string(),
            (ManagerKind::Chocolatey, Tool::Python) => "python".to_string(),
            (ManagerKind::Chocolatey, Tool::Postman) => "postman".to_string(),
            (ManagerKind::Winget, Tool::Git) => "Git.Git".to_string(),
            (ManagerKind::Winget, Tool::VsCode) => "Microsoft.VisualStudioCode".to_string(),
            (ManagerKind::Winget, Tool::Docker) => "Docker.DockerDesktop".to_string(),
            (ManagerKind::Winget, Tool::NodeJs) => "OpenJS.NodeJS".to_string(),
            (ManagerKind::Winget, Tool::Python) => format!(
                "Python.Python.{}",
                spec.version.as_deref().unwrap_or(DEFAULT_PYTHON)
            ),
            (ManagerKind::Winget, Tool::Postman) => "Postman.Postman".to_string(),
            _ => return None,
        };
        Some(id)
    }
}

impl PackageManagerAdapter for WindowsAdapter {
    fn name(&self) -> String {
        format!("Windows ({})", self.manager)
    }

    fn bootstrap(&self) -> Vec<String> {
        if self.needs_bootstrap {
            vec![CHOCOLATEY_BOOTSTRAP.to_string()]
        } else {
            Vec::new()
        }
    }

    fn install_package(&self, tool: Tool, spec: &ToolSpec) -> Option<Vec<String>> {
        let id = Self::package_id(tool, spec, self.manager)?;
        let command = match self.manager {
            ManagerKind::Winget => format!("winget install --id {} -e --source winget", id),
            _ => format!("choco install {} -y", id),
        };
        Some(vec![command])
    }
}
