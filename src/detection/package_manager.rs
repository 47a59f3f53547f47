//! Package manager detection.

use std::fmt;

use super::platform::{OsFamily, Probe};

/// A host-level package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerKind {
    // Windows
    Chocolatey,
    Winget,

    // macOS
    Homebrew,

    // Linux
    Apt,
    Yum,
    Dnf,
    Snap,
}

impl ManagerKind {
    /// Executable probed to detect this manager.
    pub fn binary(&self) -> &'static str {
        match self {
            ManagerKind::Chocolatey => "choco",
            ManagerKind::Winget => "winget",
            ManagerKind::Homebrew => "brew",
            ManagerKind::Apt => "apt",
            ManagerKind::Yum => "yum",
            ManagerKind::Dnf => "dnf",
            ManagerKind::Snap => "snap",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ManagerKind::Chocolatey => "Chocolatey",
            ManagerKind::Winget => "winget",
            ManagerKind::Homebrew => "Homebrew",
            ManagerKind::Apt => "apt",
            ManagerKind::Yum => "yum",
            ManagerKind::Dnf => "dnf",
            ManagerKind::Snap => "snap",
        }
    }

    /// Candidates for an OS family, in preference order.
    pub fn candidates(os: OsFamily) -> &'static [ManagerKind] {
        match os {
            OsFamily::Windows => &[ManagerKind::Chocolatey, ManagerKind::Winget],
            OsFamily::MacOs => &[ManagerKind::Homebrew],
            OsFamily::Linux => &[
                ManagerKind::Apt,
                ManagerKind::Yum,
                ManagerKind::Dnf,
                ManagerKind::Snap,
            ],
        }
    }
}

impl fmt::Display for ManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Detects installed package managers.
pub struct PackageManagerDetector;

impl PackageManagerDetector {
    /// Detect the usable package managers for `os`, in preference order.
    ///
    /// Windows reports every available candidate. macOS and Linux report at
    /// most one: the first candidate found.
    pub fn detect(os: OsFamily, probe: &dyn Probe) -> Vec<ManagerKind> {
        let mut found = ManagerKind::candidates(os)
            .iter()
            .copied()
            .filter(|m| probe.has_command(m.binary()));

        match os {
            OsFamily::Windows => found.collect(),
            OsFamily::MacOs | OsFamily::Linux => found.next().into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::MockProbe;

    #[test]
    fn linux_prefers_apt() {
        let probe = MockProbe::with_commands(&["snap", "dnf", "apt"]);
        let managers = PackageManagerDetector::detect(OsFamily::Linux, &probe);
        assert_eq!(managers, vec![ManagerKind::Apt]);
    }

    #[test]
    fn linux_prefers_yum_over_dnf() {
        let probe = MockProbe::with_commands(&["dnf", "yum"]);
        let managers = PackageManagerDetector::detect(OsFamily::Linux, &probe);
        assert_eq!(managers, vec![ManagerKind::Yum]);
    }

    #[test]
    fn linux_falls_back_to_snap() {
        let probe = MockProbe::with_commands(&["snap"]);
        let managers = PackageManagerDetector::detect(OsFamily::Linux, &probe);
        assert_eq!(managers, vec![ManagerKind::Snap]);
    }

    #[test]
    fn linux_without_manager_is_empty() {
        let probe = MockProbe::with_commands(&[]);
        assert!(PackageManagerDetector::detect(OsFamily::Linux, &probe).is_empty());
    }

    #[test]
    fn windows_reports_all_available() {
        let probe = MockProbe::with_commands(&["winget", "choco"]);
        let managers = PackageManagerDetector::detect(OsFamily::Windows, &probe);
        assert_eq!(managers, vec![ManagerKind::Chocolatey, ManagerKind::Winget]);
    }

    #[test]
    fn macos_detects_homebrew() {
        let probe = MockProbe::with_commands(&["brew"]);
        let managers = PackageManagerDetector::detect(OsFamily::MacOs, &probe);
        assert_eq!(managers, vec![ManagerKind::Homebrew]);
    }

    #[test]
    fn binaries_match_cli_names() {
        assert_eq!(ManagerKind::Chocolatey.binary(), "choco");
        assert_eq!(ManagerKind::Homebrew.binary(), "brew");
        assert_eq!(ManagerKind::Dnf.to_string(), "dnf");
    }
}
