//! Command-based detection.

use std::process::{Command, Stdio};
use std::sync::OnceLock;

use regex::Regex;

/// Check whether `name` is installed and runnable.
///
/// Runs `<name> --version` directly (no shell) and reports whether it
/// exited with status zero. Any spawn error, including "not found",
/// counts as absent.
pub fn has_command(name: &str) -> bool {
    if name.trim().is_empty() {
        return false;
    }

    let present = Command::new(name)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);

    tracing::debug!(command = name, present, "probed command");
    present
}

/// Version reported by `<name> --version`, if it runs and prints one.
pub fn command_version(name: &str) -> Option<String> {
    let output = Command::new(name)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    extract_version(&String::from_utf8_lossy(&output.stdout))
}

fn version_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"]
            .iter()
            .filter_map(|p| Regex::new(p).ok())
            .collect()
    })
}

/// Extract version from command output.
pub fn extract_version(output: &str) -> Option<String> {
    version_patterns().iter().find_map(|re| {
        re.captures(output)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_command_is_absent() {
        assert!(!has_command("this-command-does-not-exist-12345"));
    }

    #[test]
    fn empty_name_is_absent() {
        assert!(!has_command(""));
        assert!(!has_command("   "));
    }

    #[cfg(unix)]
    #[test]
    fn shell_utility_is_present() {
        // `true --version` exits 0 with GNU coreutils and ignores arguments elsewhere.
        assert!(has_command("true"));
    }

    #[test]
    fn missing_command_has_no_version() {
        assert!(command_version("this-command-does-not-exist-12345").is_none());
    }

    #[test]
    fn extract_version_semver() {
        let output = "git version 2.43.0";
        assert_eq!(extract_version(output), Some("2.43.0".to_string()));
    }

    #[test]
    fn extract_version_with_v() {
        assert_eq!(extract_version("v18.17.0"), Some("18.17.0".to_string()));
        assert_eq!(extract_version("v18.17"), Some("18.17".to_string()));
    }

    #[test]
    fn extract_version_with_word() {
        assert_eq!(
            extract_version("Docker version 24.0"),
            Some("24.0".to_string())
        );
    }

    #[test]
    fn extract_version_no_match() {
        assert!(extract_version("no version here").is_none());
    }
}
