//! Configuration schema definitions.
//!
//! These structs map to `template-setup/config/setup-config.{yml,json}`.

use serde::{Deserialize, Serialize};
use indexmap::IndexMap;

/// Root configuration: the set of tools to install.
///
/// Tools are keyed by identifier (`git`, `vscode`, ...) and keep the order
/// of the file. Installation order is fixed by
/// [`Tool::ALL`](crate::installer::Tool::ALL), not by map order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupConfig {
    pub tools: IndexMap<String, ToolSpec>,
}

impl SetupConfig {
    /// Look up a tool by identifier.
    pub fn tool(&self, id: &str) -> Option<&ToolSpec> {
        self.tools.get(id)
    }
}

/// Installation requirements and parameters for one tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Display name
    pub name: String,

    /// Whether a failed install aborts the run
    #[serde(default = "default_required")]
    pub required: bool,

    /// Version constraint (e.g. `18.x`, `3.11`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Editor extension identifiers, installed in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,

    /// Key/value settings applied after install, in file order (git only)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub config: IndexMap<String, String>,
}

impl ToolSpec {
    /// A required tool with no parameters.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            required: true,
            version: None,
            extensions: Vec::new(),
            config: IndexMap::new(),
        }
    }

    /// Mark the tool optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set the version constraint.
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    /// Set the extension list.
    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = extensions.iter().map(|e| e.to_string()).collect();
        self
    }

    /// Add one key/value setting.
    pub fn with_setting(mut self, key: &str, value: &str) -> Self {
        self.config.insert(key.to_string(), value.to_string());
        self
    }
}

fn default_required() -> bool {
    true
}
