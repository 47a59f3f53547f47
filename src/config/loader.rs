//! Configuration file discovery and loading.
//!
//! The config file lives under the setup tool's directory of a base path:
//! `<base>/template-setup/config/setup-config.{yml,yaml,json}`. The first
//! existing candidate wins. When none exists the built-in default is used.
//! A file that exists but does not parse is an error; it never falls back.

use crate::config::defaults::default_config;
use crate::config::schema::SetupConfig;
use crate::error::{Result, TeamifiedError};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory of the setup tool, relative to the base path.
pub const SETUP_DIR: &str = "template-setup";

/// Config directory inside [`SETUP_DIR`].
pub const CONFIG_DIR: &str = "config";

/// Candidate file names, in lookup order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    "setup-config.yml",
    "setup-config.yaml",
    "setup-config.json",
];

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file.
    File(PathBuf),
    /// No file was present; the built-in default was used.
    BuiltinDefault,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::BuiltinDefault => f.write_str("built-in defaults"),
        }
    }
}

/// A configuration together with its source.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: SetupConfig,
    pub source: ConfigSource,
}

/// The config directory for a base path.
pub fn config_dir(base_path: &Path) -> PathBuf {
    base_path.join(SETUP_DIR).join(CONFIG_DIR)
}

/// The first existing config file under `base_path`, if any.
pub fn find_config_file(base_path: &Path) -> Option<PathBuf> {
    let dir = config_dir(base_path);
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load configuration for `base_path`.
///
/// # Errors
///
/// Returns `ConfigParseError` if a config file exists but is malformed.
pub fn load_config(base_path: &Path) -> Result<LoadedConfig> {
    match find_config_file(base_path) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config file");
            let config = load_config_file(&path)?;
            Ok(LoadedConfig {
                config,
                source: ConfigSource::File(path),
            })
        }
        None => {
            tracing::debug!(
                dir = %config_dir(base_path).display(),
                "no config file, using built-in defaults"
            );
            Ok(LoadedConfig {
                config: default_config(),
                source: ConfigSource::BuiltinDefault,
            })
        }
    }
}

/// Load configuration from an explicit path, or discover it under `base_path`.
///
/// An explicit path must exist.
pub fn load_config_from(base_path: &Path, explicit: Option<&Path>) -> Result<LoadedConfig> {
    match explicit {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                base_path.join(path)
            };
            let config = load_config_file(&path)?;
            Ok(LoadedConfig {
                config,
                source: ConfigSource::File(path),
            })
        }
        None => load_config(base_path),
    }
}

/// Load a single config file and parse it according to its extension.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the content is invalid.
pub fn load_config_file(path: &Path) -> Result<SetupConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TeamifiedError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TeamifiedError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse config content. `.json` files are parsed as JSON, anything else
/// as YAML.
///
/// # Arguments
///
/// * `content` - The file content to parse
/// * `source_path` - Path for format selection and error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<SetupConfig> {
    let is_json = source_path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| TeamifiedError::ConfigParseError {
        path: source_path.to_path_buf(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, name: &str, content: &str) -> PathBuf {
        let dir = config_dir(temp.path());
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn absent_file_uses_default() {
        let temp = TempDir::new().unwrap();
        let loaded = load_config(temp.path()).unwrap();

        assert_eq!(loaded.source, ConfigSource::BuiltinDefault);
        assert_eq!(loaded.config, default_config());
    }

    #[test]
    fn json_file_is_loaded() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            "setup-config.json",
            r#"{"tools": {"git": {"name": "Git", "required": true}}}"#,
        );

        let loaded = load_config(temp.path()).unwrap();

        assert_eq!(loaded.source, ConfigSource::File(path));
        assert_eq!(loaded.config.tools.len(), 1);
        assert_eq!(loaded.config.tool("git").unwrap().name, "Git");
    }

    #[test]
    fn yaml_takes_precedence_over_json() {
        let temp = TempDir::new().unwrap();
        write_config(
            &temp,
            "setup-config.json",
            r#"{"tools": {"git": {"name": "From JSON"}}}"#,
        );
        let yaml = write_config(&temp, "setup-config.yml", "tools:\n  git:\n    name: From YAML\n");

        let loaded = load_config(temp.path()).unwrap();

        assert_eq!(loaded.source, ConfigSource::File(yaml));
        assert_eq!(loaded.config.tool("git").unwrap().name, "From YAML");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, "setup-config.json", "{ not json");

        let err = load_config(temp.path()).unwrap_err();
        assert!(matches!(err, TeamifiedError::ConfigParseError { .. }));
    }

    #[test]
    fn explicit_missing_path_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config_from(temp.path(), Some(Path::new("nope.yml"))).unwrap_err();
        assert!(matches!(err, TeamifiedError::ConfigNotFound { .. }));
    }

    #[test]
    fn explicit_relative_path_resolves_against_base() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("custom.yml"), "tools: {}\n").unwrap();

        let loaded = load_config_from(temp.path(), Some(Path::new("custom.yml"))).unwrap();
        assert!(loaded.config.tools.is_empty());
        assert_eq!(
            loaded.source,
            ConfigSource::File(temp.path().join("custom.yml"))
        );
    }

    #[test]
    fn source_display() {
        assert_eq!(ConfigSource::BuiltinDefault.to_string(), "built-in defaults");
        assert_eq!(
            ConfigSource::File(PathBuf::from("/x/setup-config.yml")).to_string(),
            "/x/setup-config.yml"
        );
    }
}
