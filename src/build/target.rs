//! Player build targets and build options.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Standalone player to build, with its output location.
///
/// Each target maps to one of the editor's `-build*Player` command-line
/// switches.
///
/// # Example
///
/// ```rust
/// use std::path::PathBuf;
/// use unity_editor_discovery::BuildTarget;
///
/// let target = BuildTarget::Windows64 {
///     output: PathBuf::from(r"C:\Builds\Game.exe"),
/// };
/// assert_eq!(target.player_switch(), "-buildWindows64Player");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum BuildTarget {
    /// 32-bit Windows player.
    Windows {
        /// Path of the player executable to create.
        output: PathBuf,
    },
    /// 64-bit Windows player.
    Windows64 {
        /// Path of the player executable to create.
        output: PathBuf,
    },
    /// Universal macOS application bundle.
    OsxUniversal {
        /// Path of the `.app` bundle to create.
        output: PathBuf,
    },
    /// 64-bit Linux player.
    Linux64 {
        /// Path of the player executable to create.
        output: PathBuf,
    },
}

impl BuildTarget {
    /// The editor switch that builds this player.
    pub fn player_switch(&self) -> &'static str {
        match self {
            Self::Windows { .. } => "-buildWindowsPlayer",
            Self::Windows64 { .. } => "-buildWindows64Player",
            Self::OsxUniversal { .. } => "-buildOSXUniversalPlayer",
            Self::Linux64 { .. } => "-buildLinux64Player",
        }
    }

    /// Where the player is written.
    pub fn output(&self) -> &Path {
        match self {
            Self::Windows { output }
            | Self::Windows64 { output }
            | Self::OsxUniversal { output }
            | Self::Linux64 { output } => output,
        }
    }
}

/// Options for a batch-mode build.
///
/// # Default Behavior
///
/// Builds may run for up to one hour. The editor log is written to
/// `unity-build.log` in the project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Maximum time the editor may run before it is killed.
    ///
    /// Default: 1 hour
    pub timeout: Duration,

    /// Editor log file, `None` for `<project>/unity-build.log`.
    pub log_file: Option<PathBuf>,
}

impl BuildOptions {
    /// Log file used for a build of `project`.
    pub fn log_file_for(&self, project: &Path) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| project.join("unity-build.log"))
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60 * 60),
            log_file: None,
        }
    }
}
