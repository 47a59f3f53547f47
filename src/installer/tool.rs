//! The closed set of installable tools.

use std::fmt;

/// A tool the installer knows how to install.
///
/// Variant order is the installation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tool {
    Git,
    VsCode,
    Docker,
    NodeJs,
    Python,
    Playwright,
    Postman,
}

impl Tool {
    /// Every tool, in installation order.
    pub const ALL: [Tool; 7] = [
        Tool::Git,
        Tool::VsCode,
        Tool::Docker,
        Tool::NodeJs,
        Tool::Python,
        Tool::Playwright,
        Tool::Postman,
    ];

    /// Configuration key.
    pub fn id(&self) -> &'static str {
        match self {
            Tool::Git => "git",
            Tool::VsCode => "vscode",
            Tool::Docker => "docker",
            Tool::NodeJs => "nodejs",
            Tool::Python => "python",
            Tool::Playwright => "playwright",
            Tool::Postman => "postman",
        }
    }

    /// Look up a tool by configuration key.
    pub fn from_id(id: &str) -> Option<Tool> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Executable whose presence indicates the tool is installed.
    pub fn probe_binary(&self) -> &'static str {
        match self {
            Tool::Git => "git",
            Tool::VsCode => "code",
            Tool::Docker => "docker",
            Tool::NodeJs => "node",
            Tool::Python => {
                if cfg!(windows) {
                    "python"
                } else {
                    "python3"
                }
            }
            Tool::Playwright => "playwright",
            Tool::Postman => "postman",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
