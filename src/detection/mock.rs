//! Simulated host for testing detection and installation.
//!
//! # Example
//!
//! ```
//! use teamified::detection::{DistroFamily, MockProbe, Probe};
//!
//! let probe = MockProbe::with_commands(&["apt", "git"]).distro(DistroFamily::Debian);
//! assert!(probe.has_command("apt"));
//! assert!(!probe.has_command("brew"));
//! assert_eq!(probe.detect_distro(), DistroFamily::Debian);
//! assert_eq!(probe.probed(), vec!["apt", "brew"]);
//! ```

use std::cell::RefCell;
use std::collections::HashSet;

use super::distro::DistroFamily;
use super::platform::Probe;

/// A [`Probe`] answering from a fixed set of present commands.
#[derive(Debug)]
pub struct MockProbe {
    commands: HashSet<String>,
    distro: DistroFamily,
    probed: RefCell<Vec<String>>,
}

impl MockProbe {
    /// A host where exactly `commands` are present.
    pub fn with_commands(commands: &[&str]) -> Self {
        Self {
            commands: commands.iter().map(|c| c.to_string()).collect(),
            distro: DistroFamily::Unknown,
            probed: RefCell::new(Vec::new()),
        }
    }

    /// Set the distribution family reported by the release file.
    pub fn distro(mut self, distro: DistroFamily) -> Self {
        self.distro = distro;
        self
    }

    /// Command names probed so far, in order.
    pub fn probed(&self) -> Vec<String> {
        self.probed.borrow().clone()
    }
}

impl Probe for MockProbe {
    fn has_command(&self, name: &str) -> bool {
        self.probed.borrow_mut().push(name.to_string());
        self.commands.contains(name)
    }

    fn detect_distro(&self) -> DistroFamily {
        self.distro
    }
}
