//! macOS: Homebrew.

use crate::config::ToolSpec;
use crate::detection::{ManagerKind, PlatformContext};

use super::adapter::PackageManagerAdapter;
use super::tool::Tool;

const DEFAULT_PYTHON: &str = "3.11";

/// Official Homebrew install script.
pub const HOMEBREW_BOOTSTRAP: &str =
    "/bin/bash -c \"$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)\"";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacOsAdapter {
    has_homebrew: bool,
}

impl MacOsAdapter {
    pub fn from_context(ctx: &PlatformContext) -> Self {
        Self {
            has_homebrew: ctx.managers.contains(&ManagerKind::Homebrew),
        }
    }
}

impl PackageManagerAdapter for MacOsAdapter {
    fn name(&self) -> String {
        "macOS (Homebrew)".to_string()
    }

    fn bootstrap(&self) -> Vec<String> {
        if self.has_homebrew {
            Vec::new()
        } else {
            vec![HOMEBREW_BOOTSTRAP.to_string()]
        }
    }

    fn install_package(&self, tool: Tool, spec: &ToolSpec) -> Option<Vec<String>> {
        let command = match tool {
            Tool::Git => "brew install git".to_string(),
            Tool::VsCode => "brew install --cask visual-studio-code".to_string(),
            Tool::Docker => "brew install --cask docker".to_string(),
            Tool::NodeJs => "brew install node".to_string(),
            Tool::Python => format!(
                "brew install python@{}",
                spec.version.as_deref().unwrap_or(DEFAULT_PYTHON)
            ),
            Tool::Postman => "brew install --cask postman".to_string(),
            Tool::Playwright => return None,
        };
        Some(vec![command])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::OsFamily;

    fn adapter(managers: Vec<ManagerKind>) -> MacOsAdapter {
        MacOsAdapter::from_context(&PlatformContext {
            os: OsFamily::MacOs,
            managers,
            distro: None,
        })
    }

    #[test]
    fn bootstraps_homebrew_when_missing() {
        assert_eq!(adapter(vec![]).bootstrap(), vec![HOMEBREW_BOOTSTRAP]);
        assert!(adapter(vec![ManagerKind::Homebrew]).bootstrap().is_empty());
    }

    #[test]
    fn casks_for_desktop_apps() {
        let brew = adapter(vec![ManagerKind::Homebrew]);
        let spec = ToolSpec::new("x");
        assert_eq!(
            brew.install(Tool::VsCode, &spec).unwrap(),
            vec!["brew install --cask visual-studio-code"]
        );
        assert_eq!(
            brew.install(Tool::Docker, &spec).unwrap(),
            vec!["brew install --cask docker"]
        );
        assert_eq!(
            brew.install(Tool::Postman, &spec).unwrap(),
            vec!["brew install --cask postman"]
        );
    }

    #[test]
    fn python_formula_is_versioned() {
        let brew = adapter(vec![ManagerKind::Homebrew]);
        assert_eq!(
            brew.install(Tool::Python, &ToolSpec::new("Python").with_version("3.12"))
                .unwrap(),
            vec!["brew install python@3.12"]
        );
        assert_eq!(
            brew.install(Tool::Python, &ToolSpec::new("Python")).unwrap(),
            vec!["brew install python@3.11"]
        );
    }

    #[test]
    fn playwright_is_not_a_formula() {
        let brew = adapter(vec![ManagerKind::Homebrew]);
        let spec = ToolSpec::new("Playwright");
        assert!(brew.install_package(Tool::Playwright, &spec).is_none());
        assert!(brew.install(Tool::Playwright, &spec).is_some());
    }
}
