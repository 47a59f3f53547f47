//! Linux distribution family detection.

use std::fmt;
use std::fs;
use std::path::Path;

/// Standard location of the release-info file.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Coarse classification of a Linux distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistroFamily {
    /// Debian, Ubuntu and derivatives.
    Debian,
    /// RHEL, CentOS and derivatives.
    Rhel,
    Fedora,
    Unknown,
}

impl DistroFamily {
    /// Tag used in console output and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistroFamily::Debian => "debian",
            DistroFamily::Rhel => "rhel",
            DistroFamily::Fedora => "fedora",
            DistroFamily::Unknown => "unknown",
        }
    }

    /// Classify release-info text by case-insensitive substring match.
    ///
    /// Families are checked in a fixed order, so text naming several
    /// distributions resolves to the first family that matches.
    pub fn classify(release_info: &str) -> Self {
        let content = release_info.to_lowercase();

        if content.contains("ubuntu") || content.contains("debian") {
            DistroFamily::Debian
        } else if content.contains("centos") || content.contains("rhel") {
            DistroFamily::Rhel
        } else if content.contains("fedora") {
            DistroFamily::Fedora
        } else {
            DistroFamily::Unknown
        }
    }
}

impl fmt::Display for DistroFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the distribution family from `/etc/os-release`.
pub fn detect_distro() -> DistroFamily {
    detect_distro_from(Path::new(OS_RELEASE_PATH))
}

/// Detect the distribution family from an explicit release-info file.
///
/// A missing or unreadable file yields [`DistroFamily::Unknown`].
pub fn detect_distro_from(path: &Path) -> DistroFamily {
    match fs::read_to_string(path) {
        Ok(content) => DistroFamily::classify(&content),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "release file unreadable");
            DistroFamily::Unknown
        }
    }
}
