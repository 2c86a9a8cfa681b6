//! Descriptor of a discovered Unity Editor installation.

use crate::UnityVersion;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A Unity Editor installation found on this machine.
///
/// Pairs the installation directory with its parsed version and the path to
/// the editor executable inside it.
///
/// # Example
///
/// ```rust
/// use std::path::PathBuf;
/// use unity_editor_discovery::UnityEditorDescriptor;
///
/// let editor = UnityEditorDescriptor::new(
///     PathBuf::from(r"C:\Program Files\Unity\Hub\Editor\2021.3.5f1"),
///     "2021.3.5f1".parse().unwrap(),
///     PathBuf::from(r"C:\Program Files\Unity\Hub\Editor\2021.3.5f1\Editor\Unity.exe"),
/// );
/// assert_eq!(editor.version().year(), 2021);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnityEditorDescriptor {
    installation_path: PathBuf,
    version: UnityVersion,
    executable_path: PathBuf,
}

impl UnityEditorDescriptor {
    /// Create a descriptor.
    pub fn new(installation_path: PathBuf, version: UnityVersion, executable_path: PathBuf) -> Self {
        Self {
            installation_path,
            version,
            executable_path,
        }
    }

    /// Root directory of the installation.
    pub fn installation_path(&self) -> &Path {
        &self.installation_path
    }

    /// Parsed editor version.
    pub fn version(&self) -> &UnityVersion {
        &self.version
    }

    /// Path to `Unity.exe`.
    pub fn executable_path(&self) -> &Path {
        &self.executable_path
    }
}
