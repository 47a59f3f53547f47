//! Host platform detection.
//!
//! [`PlatformContext`] is derived once at startup and read-only for the
//! rest of the run. Detection goes through the [`Probe`] trait so a host can
//! be simulated in tests with [`MockProbe`](super::MockProbe).

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::TeamifiedError;

use super::command_detection::has_command;
use super::distro::{detect_distro_from, DistroFamily, OS_RELEASE_PATH};
use super::package_manager::{ManagerKind, PackageManagerDetector};

/// Operating-system families with an installer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    MacOs,
    Linux,
}

impl OsFamily {
    /// Family of the running host.
    pub fn current() -> Result<Self, TeamifiedError> {
        std::env::consts::OS.parse()
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            OsFamily::Windows => "Windows",
            OsFamily::MacOs => "macOS",
            OsFamily::Linux => "Linux",
        }
    }
}

impl FromStr for OsFamily {
    type Err = TeamifiedError;

    /// Accepts Rust target names (`windows`, `macos`, `linux`) and the
    /// `darwin` kernel name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" => Ok(OsFamily::Windows),
            "macos" | "darwin" => Ok(OsFamily::MacOs),
            "linux" => Ok(OsFamily::Linux),
            _ => Err(TeamifiedError::UnsupportedPlatform { os: s.to_string() }),
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Host capabilities consulted during detection.
pub trait Probe {
    /// Whether `<name> --version` runs and exits zero.
    fn has_command(&self, name: &str) -> bool;

    /// Linux distribution family from the release-info file.
    fn detect_distro(&self) -> DistroFamily;
}

/// Probes the real host.
#[derive(Debug, Clone)]
pub struct SystemProbe {
    release_file: PathBuf,
}

impl SystemProbe {
    /// Probe using `/etc/os-release`.
    pub fn new() -> Self {
        Self {
            release_file: PathBuf::from(OS_RELEASE_PATH),
        }
    }

    /// Probe using another release-info file.
    pub fn with_release_file(path: impl Into<PathBuf>) -> Self {
        Self {
            release_file: path.into(),
        }
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl Probe for SystemProbe {
    fn has_command(&self, name: &str) -> bool {
        has_command(name)
    }

    fn detect_distro(&self) -> DistroFamily {
        detect_distro_from(&self.release_file)
    }
}

/// Everything the installer needs to know about the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformContext {
    /// Operating-system family.
    pub os: OsFamily,
    /// Available package managers, most preferred first.
    pub managers: Vec<ManagerKind>,
    /// Distribution family; only set on Linux.
    pub distro: Option<DistroFamily>,
}

impl PlatformContext {
    /// Detect package managers (and the distribution on Linux) for `os`.
    pub fn detect(os: OsFamily, probe: &dyn Probe) -> Self {
        let distro = match os {
            OsFamily::Linux => Some(probe.detect_distro()),
            OsFamily::Windows | OsFamily::MacOs => None,
        };
        let managers = PackageManagerDetector::detect(os, probe);

        tracing::debug!(?os, ?managers, ?distro, "detected platform");

        Self {
            os,
            managers,
            distro,
        }
    }

    /// The preferred package manager, if any was found.
    pub fn primary_manager(&self) -> Option<ManagerKind> {
        self.managers.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::MockProbe;

    #[test]
    fn parses_supported_os_names() {
        assert_eq!("windows".parse::<OsFamily>().unwrap(), OsFamily::Windows);
        assert_eq!("macos".parse::<OsFamily>().unwrap(), OsFamily::MacOs);
        assert_eq!("Darwin".parse::<OsFamily>().unwrap(), OsFamily::MacOs);
        assert_eq!("linux".parse::<OsFamily>().unwrap(), OsFamily::Linux);
    }

    #[test]
    fn rejects_unsupported_os() {
        let err = "freebsd".parse::<OsFamily>().unwrap_err();
        assert!(matches!(err, TeamifiedError::UnsupportedPlatform { os } if os == "freebsd"));
    }

    #[test]
    fn linux_context_includes_distro() {
        let probe = MockProbe::with_commands(&["apt"]).distro(DistroFamily::Debian);
        let ctx = PlatformContext::detect(OsFamily::Linux, &probe);

        assert_eq!(ctx.os, OsFamily::Linux);
        assert_eq!(ctx.primary_manager(), Some(ManagerKind::Apt));
        assert_eq!(ctx.distro, Some(DistroFamily::Debian));
    }

    #[test]
    fn non_linux_context_has_no_distro() {
        let probe = MockProbe::with_commands(&["brew"]).distro(DistroFamily::Debian);
        let ctx = PlatformContext::detect(OsFamily::MacOs, &probe);

        assert_eq!(ctx.distro, None);
        assert_eq!(ctx.primary_manager(), Some(ManagerKind::Homebrew));
    }

    #[test]
    fn system_probe_reads_custom_release_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("os-release");
        std::fs::write(&path, "ID=fedora\n").unwrap();

        let probe = SystemProbe::with_release_file(&path);
        assert_eq!(probe.detect_distro(), DistroFamily::Fedora);
    }

    #[test]
    fn current_os_parses_on_supported_hosts() {
        if cfg!(any(target_os = "linux", target_os = "macos", target_os = "windows")) {
            assert!(OsFamily::current().is_ok());
        }
    }
}
