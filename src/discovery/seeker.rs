//! One full scan of the filesystem for Unity Editor installations.

use super::FileSystem;
use crate::{LocateError, LocatorOptions, UnityEditorDescriptor, UnityVersion};
use futures::future::try_join_all;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Scan every configured location and return the parsed installations.
///
/// Installations whose directory name is not a Unity version are skipped.
/// Any filesystem error aborts the whole scan.
pub(crate) async fn seek<F: FileSystem>(
    fs: &F,
    options: &LocatorOptions,
) -> Result<Vec<UnityEditorDescriptor>, LocateError> {
    let patterns = search_patterns(fs, options).await?;
    tracing::debug!(?patterns, "Searching for Unity Editors");

    let matches = try_join_all(patterns.iter().map(|p| fs.glob(p))).await?;

    let mut seen = HashSet::new();
    let executables: Vec<PathBuf> = matches
        .into_iter()
        .flatten()
        .filter(|path| seen.insert(path.clone()))
        .collect();

    let editors: Vec<_> = executables.into_iter().filter_map(describe).collect();
    tracing::info!(count = editors.len(), "Found Unity Editors");
    Ok(editors)
}

/// Turn an executable path into a descriptor, if its installation is versioned.
fn describe(executable: PathBuf) -> Option<UnityEditorDescriptor> {
    let installation = executable.parent()?.parent()?.to_path_buf();
    let name = installation.file_name()?.to_string_lossy().into_owned();

    match UnityVersion::parse(version_token(&name)) {
        Ok(version) => {
            tracing::debug!(%version, path = %installation.display(), "Found Unity Editor");
            Some(UnityEditorDescriptor::new(installation, version, executable))
        }
        Err(e) => {
            tracing::debug!(path = %installation.display(), error = %e, "Skipping Unity installation");
            None
        }
    }
}

/// Version token from an installation directory name.
///
/// Hub installs are named after the version (`2021.3.5f1`); standalone
/// installers usually prefix it (`Unity 2021.3.5f1`).
pub(crate) fn version_token(dir_name: &str) -> &str {
    dir_name
        .strip_prefix("Unity")
        .unwrap_or(dir_name)
        .trim_start_matches([' ', '-', '_'])
}

async fn search_patterns<F: FileSystem>(
    fs: &F,
    options: &LocatorOptions,
) -> Result<Vec<String>, LocateError> {
    let exe = options.editor_executable.as_str();
    let mut patterns = Vec::new();

    for root in &options.program_files_roots {
        patterns.push(pattern(root, &format!("*Unity*/Editor/{exe}")));
        patterns.push(pattern(root, &format!("Unity/Hub/Editor/*/Editor/{exe}")));
    }

    if let Some(config) = &options.hub_secondary_install_config {
        if let Some(secondary) = hub_secondary_install_path(fs, config).await? {
            patterns.push(pattern(&secondary, &format!("*/Editor/{exe}")));
        }
    }

    for root in &options.extra_install_roots {
        patterns.push(pattern(root, &format!("*/Editor/{exe}")));
    }

    Ok(patterns)
}

/// Custom install directory configured in Unity Hub, if any.
async fn hub_secondary_install_path<F: FileSystem>(
    fs: &F,
    config: &Path,
) -> Result<Option<PathBuf>, LocateError> {
    let Some(contents) = fs
        .read_to_string(config)
        .await
        .map_err(|source| LocateError::Io {
            path: config.to_path_buf(),
            source,
        })?
    else {
        return Ok(None);
    };

    match serde_json::from_str::<String>(&contents) {
        Ok(path) if !path.trim().is_empty() => Ok(Some(PathBuf::from(path.trim()))),
        Ok(_) => Ok(None),
        Err(e) => {
            tracing::debug!(path = %config.display(), error = %e, "Ignoring unreadable Unity Hub config");
            Ok(None)
        }
    }
}

/// Glob pattern for `tail` under a literal `root`.
fn pattern(root: &Path, tail: &str) -> String {
    let root = root.to_string_lossy();
    let root = root.trim_end_matches(['/', '\\']);
    format!("{}/{tail}", glob::Pattern::escape(root))
}
