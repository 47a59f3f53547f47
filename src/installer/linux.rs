//! Linux: apt, yum, dnf or snap.
//!
//! apt and the RPM managers add vendor repositories for the editor and the
//! container runtime before installing them. snap only carries the editor
//! and Postman; other tools are skipped there.

use crate::config::ToolSpec;
use crate::detection::{DistroFamily, ManagerKind, PlatformContext};

use super::adapter::{major_version, PackageManagerAdapter};
use super::tool::Tool;

const DEFAULT_NODE: &str = "18.x";
const DEFAULT_PYTHON: &str = "3.11";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinuxAdapter {
    manager: Option<ManagerKind>,
    distro: DistroFamily,
}

impl LinuxAdapter {
    pub fn from_context(ctx: &PlatformContext) -> Self {
        Self {
            manager: ctx.primary_manager(),
            distro: ctx.distro.unwrap_or(DistroFamily::Unknown),
        }
    }

    pub fn manager(&self) -> Option<ManagerKind> {
        self.manager
    }

    pub fn distro(&self) -> DistroFamily {
        self.distro
    }

    fn apt(tool: Tool, spec: &ToolSpec) -> Vec<String> {
        match tool {
            Tool::Git => vec!["sudo apt update && sudo apt install -y git".to_string()],
            Tool::VsCode => vec![
                "wget -qO- https://packages.microsoft.com/keys/microsoft.asc | gpg --dearmor > packages.microsoft.gpg".to_string(),
                "sudo install -o root -g root -m 644 packages.microsoft.gpg /etc/apt/trusted.gpg.d/".to_string(),
                "sudo sh -c 'echo \"deb [arch=amd64,arm64,armhf signed-by=/etc/apt/trusted.gpg.d/packages.microsoft.gpg] https://packages.microsoft.com/repos/code stable main\" > /etc/apt/sources.list.d/vscode.list'".to_string(),
                "sudo apt update && sudo apt install -y code".to_string(),
            ],
            Tool::Docker => vec![
                "sudo apt update".to_string(),
                "sudo apt install -y ca-certificates curl gnupg lsb-release".to_string(),
                "sudo mkdir -p /etc/apt/keyrings".to_string(),
                "curl -fsSL https://download.docker.com/linux/$(. /etc/os-release && echo \"$ID\")/gpg | sudo gpg --dearmor -o /etc/apt/keyrings/docker.gpg".to_string(),
                "echo \"deb [arch=$(dpkg --print-architecture) signed-by=/etc/apt/keyrings/docker.gpg] https://download.docker.com/linux/$(. /etc/os-release && echo \"$ID\") $(lsb_release -cs) stable\" | sudo tee /etc/apt/sources.list.d/docker.list > /dev/null".to_string(),
                "sudo apt update && sudo apt install -y docker-ce docker-ce-cli containerd.io docker-compose-plugin".to_string(),
            ],
            Tool::NodeJs => vec![
                format!(
                    "curl -fsSL https://deb.nodesource.com/setup_{}.x | sudo -E bash -",
                    node_line(spec)
                ),
                "sudo apt install -y nodejs".to_string(),
            ],
            Tool::Python => vec![format!(
                "sudo apt install -y python{} python3-pip",
                python_version(spec)
            )],
            Tool::Postman => postman_tarball(),
            Tool::Playwright => Vec::new(),
        }
    }

    fn rpm(manager: &str, tool: Tool, spec: &ToolSpec) -> Vec<String> {
        match tool {
            Tool::Git => vec![format!("sudo {} install -y git", manager)],
            Tool::VsCode => vec![
                "sudo rpm --import https://packages.microsoft.com/keys/microsoft.asc".to_string(),
                "sudo sh -c 'echo -e \"[code]\\nname=Visual Studio Code\\nbaseurl=https://packages.microsoft.com/yumrepos/vscode\\nenabled=1\\ngpgcheck=1\\ngpgkey=https://packages.microsoft.com/keys/microsoft.asc\" > /etc/yum.repos.d/vscode.repo'".to_string(),
                format!("sudo {} install -y code", manager),
            ],
            Tool::Docker => vec![format!("sudo {} install -y docker", manager)],
            Tool::NodeJs => vec![
                format!(
                    "curl -fsSL https://rpm.nodesource.com/setup_{}.x | sudo bash -",
                    node_line(spec)
                ),
                format!("sudo {} install -y nodejs", manager),
            ],
            Tool::Python => {
                let version = python_version(spec);
                vec![format!(
                    "sudo {} install -y python{} python{}-pip",
                    manager, version, version
                )]
            }
            Tool::Postman => postman_tarball(),
            Tool::Playwright => Vec::new(),
        }
    }

    fn snap(tool: Tool) -> Option<Vec<String>> {
        match tool {
            Tool::VsCode => Some(vec!["sudo snap install --classic code".to_string()]),
            Tool::Postman => Some(vec!["sudo snap install postman".to_string()]),
            _ => None,
        }
    }
}

impl PackageManagerAdapter for LinuxAdapter {
    fn name(&self) -> String {
        match self.manager {
            Some(manager) => format!("Linux ({})", manager),
            None => "Linux (no package manager)".to_string(),
        }
    }

    fn bootstrap(&self) -> Vec<String> {
        Vec::new()
    }

    fn install_package(&self, tool: Tool, spec: &ToolSpec) -> Option<Vec<String>> {
        let commands = match self.manager {
            Some(ManagerKind::Apt) => Self::apt(tool, spec),
            Some(ManagerKind::Yum) => Self::rpm("yum", tool, spec),
            Some(ManagerKind::Dnf) => Self::rpm("dnf", tool, spec),
            Some(ManagerKind::Snap) => return Self::snap(tool),
            // Postman ships a tarball that needs no manager.
            _ => match tool {
                Tool::Postman => postman_tarball(),
                _ => return None,
            },
        };
        if commands.is_empty() {
            None
        } else {
            Some(commands)
        }
    }
}

fn node_line(spec: &ToolSpec) -> &str {
    major_version(spec.version.as_deref().unwrap_or(DEFAULT_NODE))
}

fn python_version(spec: &ToolSpec) -> &str {
    spec.version.as_deref().unwrap_or(DEFAULT_PYTHON)
}

fn postman_tarball() -> Vec<String> {
    vec![
        "wget https://dl.pstmn.io/download/latest/linux64 -O postman.tar.gz".to_string(),
        "sudo tar -xzf postman.tar.gz -C /opt".to_string(),
        "sudo ln -sf /opt/Postman/Postman /usr/local/bin/postman".to_string(),
    ]
}
