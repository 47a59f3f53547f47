//! Built-in configuration used when no config file exists.

use indexmap::IndexMap;

use super::schema::{SetupConfig, ToolSpec};

/// Editor extensions installed by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "ms-python.python",
    "ms-vscode.vscode-typescript-next",
    "esbenp.prettier-vscode",
    "dbaeumer.vscode-eslint",
    "ms-playwright.playwright",
    "ms-azuretools.vscode-docker",
    "bradlc.vscode-tailwindcss",
    "formulahendry.auto-rename-tag",
    "christian-kohler.path-intellisense",
    "mhutchie.git-graph",
];

/// The default tool set: git, vscode, docker, nodejs, python, playwright
/// and postman. Postman is the only optional tool.
pub fn default_config() -> SetupConfig {
    let tools = [
        (
            "git",
            ToolSpec::new("Git")
                .with_setting("user.name", "Developer")
                .with_setting("user.email", "developer@example.com")
                .with_setting("init.defaultBranch", "main")
                .with_setting("pull.rebase", "false"),
        ),
        (
            "vscode",
            ToolSpec::new("Visual Studio Code").with_extensions(DEFAULT_EXTENSIONS),
        ),
        ("docker", ToolSpec::new("Docker Desktop")),
        ("nodejs", ToolSpec::new("Node.js").with_version("18.x")),
        ("python", ToolSpec::new("Python").with_version("3.11")),
        ("playwright", ToolSpec::new("Playwright")),
        ("postman", ToolSpec::new("Postman").optional()),
    ];

    SetupConfig {
        tools: tools
            .into_iter()
            .map(|(id, spec)| (id.to_string(), spec))
            .collect::<IndexMap<_, _>>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_exactly_seven_tools() {
        let config = default_config();
        let ids: Vec<&str> = config.tools.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            ids,
            vec!["git", "vscode", "docker", "nodejs", "python", "playwright", "postman"]
        );
    }

    #[test]
    fn only_postman_is_optional() {
        let config = default_config();
        for (id, spec) in &config.tools {
            assert_eq!(spec.required, id != "postman", "{id}");
        }
    }

    #[test]
    fn git_has_team_settings() {
        let config = default_config();
        let git = config.tool("git").unwrap();
        assert_eq!(git.config.get("init.defaultBranch").unwrap(), "main");
        assert_eq!(git.config.get("pull.rebase").unwrap(), "false");
        assert_eq!(git.config.len(), 4);
        let keys: Vec<&str> = git.config.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["user.name", "user.email", "init.defaultBranch", "pull.rebase"]
        );
    }

    #[test]
    fn runtimes_carry_versions() {
        let config = default_config();
        assert_eq!(config.tool("nodejs").unwrap().version.as_deref(), Some("18.x"));
        assert_eq!(config.tool("python").unwrap().version.as_deref(), Some("3.11"));
    }

    #[test]
    fn vscode_lists_extensions_in_order() {
        let config = default_config();
        let vscode = config.tool("vscode").unwrap();
        assert_eq!(vscode.extensions.len(), 10);
        assert_eq!(vscode.extensions[0], "ms-python.python");
        assert_eq!(vscode.extensions[9], "mhutchie.git-graph");
    }
}
