//! Host platform identification.

use serde::{Deserialize, Serialize};

/// Operating system family of a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[non_exhaustive]
pub enum PlatformFamily {
    /// Microsoft Windows.
    Windows,
    /// Linux distributions.
    Linux,
    /// Apple macOS.
    #[strum(to_string = "macOS")]
    MacOs,
    /// Anything else.
    Unknown,
}

impl PlatformFamily {
    /// Family of the platform this process runs on.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to its family.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            "macos" => Self::MacOs,
            _ => Self::Unknown,
        }
    }
}

/// Reports the platform family that editor discovery runs against.
///
/// The locator consults this before scanning. Substitute it to exercise
/// discovery on hosts that are not Windows.
pub trait PlatformProbe: Send + Sync {
    /// Family of the host.
    fn family(&self) -> PlatformFamily;
}

/// Probe backed by the compile-time target OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl PlatformProbe for HostPlatform {
    fn family(&self) -> PlatformFamily {
        PlatformFamily::current()
    }
}

/// A fixed family acts as its own probe.
impl PlatformProbe for PlatformFamily {
    fn family(&self) -> PlatformFamily {
        *self
    }
}
