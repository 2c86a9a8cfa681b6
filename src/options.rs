//! Locator configuration.
//!
//! This module provides the [`LocatorOptions`] struct describing where
//! Unity Editors are searched for.

use std::env;
use std::path::PathBuf;

/// Name of the editor executable inside `<installation>/Editor`.
pub const DEFAULT_EDITOR_EXECUTABLE: &str = "Unity.exe";

/// Environment variables naming the Program Files directories.
const PROGRAM_FILES_VARS: &[&str] = &["ProgramFiles", "ProgramW6432", "ProgramFiles(x86)"];

/// Where to search for Unity Editor installations.
///
/// # Default Behavior
///
/// [`LocatorOptions::default`] reads the Windows environment, see
/// [`LocatorOptions::from_env`]. Tests and unusual setups can build the
/// struct directly.
///
/// # Example
///
/// ```rust
/// use std::path::PathBuf;
/// use unity_editor_discovery::LocatorOptions;
///
/// let opts = LocatorOptions {
///     program_files_roots: vec![PathBuf::from(r"D:\Apps")],
///     extra_install_roots: vec![PathBuf::from(r"E:\UnityEditors")],
///     ..LocatorOptions::empty()
/// };
/// assert_eq!(opts.editor_executable, "Unity.exe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorOptions {
    /// Program Files style roots.
    ///
    /// Each root is searched for standalone installs (`<root>/*Unity*`)
    /// and for Unity Hub installs (`<root>/Unity/Hub/Editor/*`).
    pub program_files_roots: Vec<PathBuf>,

    /// Unity Hub `secondaryInstallPath.json`.
    ///
    /// The file holds a JSON string naming the custom Hub install
    /// directory; each child of that directory is a candidate.
    pub hub_secondary_install_config: Option<PathBuf>,

    /// Extra directories whose children are editor installations.
    pub extra_install_roots: Vec<PathBuf>,

    /// Executable name inside `<installation>/Editor`.
    pub editor_executable: String,
}

impl LocatorOptions {
    /// Options that search nowhere.
    pub fn empty() -> Self {
        Self {
            program_files_roots: Vec::new(),
            hub_secondary_install_config: None,
            extra_install_roots: Vec::new(),
            editor_executable: DEFAULT_EDITOR_EXECUTABLE.to_string(),
        }
    }

    /// Options derived from the Windows environment.
    ///
    /// - `ProgramFiles`, `ProgramW6432` and `ProgramFiles(x86)` become
    ///   Program Files roots (duplicates removed, order kept).
    /// - `%APPDATA%\UnityHub\secondaryInstallPath.json` becomes the Hub
    ///   secondary install config.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var_os(name))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<std::ffi::OsString>) -> Self {
        let mut program_files_roots: Vec<PathBuf> = Vec::new();
        for &var in PROGRAM_FILES_VARS {
            if let Some(value) = lookup(var).filter(|v| !v.is_empty()) {
                let root = PathBuf::from(value);
                if !program_files_roots.contains(&root) {
                    program_files_roots.push(root);
                }
            }
        }

        let hub_secondary_install_config = lookup("APPDATA")
            .filter(|v| !v.is_empty())
            .map(|app_data| {
                PathBuf::from(app_data)
                    .join("UnityHub")
                    .join("secondaryInstallPath.json")
            });

        Self {
            program_files_roots,
            hub_secondary_install_config,
            ..Self::empty()
        }
    }
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self::from_env()
    }
}
