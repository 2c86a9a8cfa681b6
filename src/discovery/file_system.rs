//! Filesystem access used while scanning for editors.

use crate::LocateError;
use glob::MatchOptions;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only filesystem capability consumed by the locator.
///
/// [`HostFileSystem`] talks to the real disk. Tests substitute an in-memory
/// implementation to control what a scan sees and to count how often it
/// runs.
pub trait FileSystem: Send + Sync {
    /// Paths matching a glob pattern, in the order the backend yields them.
    fn glob(&self, pattern: &str) -> impl Future<Output = Result<Vec<PathBuf>, LocateError>> + Send;

    /// Contents of a text file, `Ok(None)` when it does not exist.
    fn read_to_string(&self, path: &Path) -> impl Future<Output = io::Result<Option<String>>> + Send;
}

/// Options shared by every backend so that `*` never crosses a directory.
pub(crate) const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// The local disk, walked with the `glob` crate.
///
/// Globbing is blocking and runs on tokio's blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFileSystem;

impl FileSystem for HostFileSystem {
    async fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>, LocateError> {
        let pattern = pattern.to_string();
        let failed_pattern = pattern.clone();
        tokio::task::spawn_blocking(move || glob_blocking(&pattern))
            .await
            .map_err(|e| LocateError::Io {
                path: PathBuf::from(failed_pattern),
                source: io::Error::other(e),
            })?
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<Option<String>> {
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

fn glob_blocking(pattern: &str) -> Result<Vec<PathBuf>, LocateError> {
    let paths = glob::glob_with(pattern, MATCH_OPTIONS).map_err(|e| LocateError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.msg.to_string(),
    })?;

    paths
        .map(|entry| {
            entry.map_err(|e| LocateError::Io {
                path: e.path().to_path_buf(),
                source: e.into_error(),
            })
        })
        .collect()
}
