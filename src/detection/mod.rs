//! Host capability detection.
//!
//! - [`has_command`] checks whether an executable runs
//! - [`detect_distro`] classifies the Linux distribution family
//! - [`PlatformContext`] combines both with package manager detection

pub mod command_detection;
pub mod distro;
pub mod mock;
pub mod package_manager;
pub mod platform;

pub use command_detection::{command_version, extract_version, has_command};
pub use distro::{detect_distro, detect_distro_from, DistroFamily, OS_RELEASE_PATH};
pub use mock::MockProbe;
pub use package_manager::{ManagerKind, PackageManagerDetector};
pub use platform::{OsFamily, PlatformContext, Probe, SystemProbe};
