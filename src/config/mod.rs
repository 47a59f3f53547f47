//! Configuration loading and schema.
//!
//! - Schema definitions in [`schema`]
//! - The built-in tool set in [`defaults`]
//! - File discovery and parsing in [`loader`]
//!
//! # Example
//!
//! ```
//! use teamified::config::{load_config, ConfigSource};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join("template-setup").join("config");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("setup-config.yml"), "tools:\n  git:\n    name: Git\n").unwrap();
//!
//! let loaded = load_config(temp.path()).unwrap();
//! assert!(matches!(loaded.source, ConfigSource::File(_)));
//! assert_eq!(loaded.config.tools.len(), 1);
//! ```

pub mod defaults;
pub mod loader;
pub mod schema;

pub use defaults::{default_config, DEFAULT_EXTENSIONS};
pub use loader::{
    config_dir, find_config_file, load_config, load_config_file, load_config_from, parse_config,
    ConfigSource, LoadedConfig, CONFIG_DIR, CONFIG_FILE_NAMES, SETUP_DIR,
};
pub use schema::{SetupConfig, ToolSpec};
