//! In-memory filesystem for unit tests.

use super::file_system::{FileSystem, MATCH_OPTIONS};
use crate::LocateError;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// A list of files and text contents, with counters for scans.
#[derive(Default)]
pub(crate) struct MemoryFileSystem {
    pub(crate) files: Vec<PathBuf>,
    pub(crate) contents: HashMap<PathBuf, String>,
    /// Number of `glob` calls made so far.
    pub(crate) glob_calls: AtomicUsize,
    /// When set, every `glob` call fails with a permission error.
    pub(crate) fail_globs: AtomicBool,
}

impl MemoryFileSystem {
    pub(crate) fn with_editors(paths: &[&str]) -> Self {
        Self {
            files: paths.iter().map(PathBuf::from).collect(),
            ..Default::default()
        }
    }

    pub(crate) fn glob_calls(&self) -> usize {
        self.glob_calls.load(Ordering::SeqCst)
    }
}

impl FileSystem for MemoryFileSystem {
    async fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>, LocateError> {
        self.glob_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_globs.load(Ordering::SeqCst) {
            return Err(LocateError::Io {
                path: PathBuf::from(pattern),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
            });
        }

        let compiled = glob::Pattern::new(pattern).map_err(|e| LocateError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.msg.to_string(),
        })?;
        Ok(self
            .files
            .iter()
            .filter(|f| compiled.matches_path_with(f, MATCH_OPTIONS))
            .cloned()
            .collect())
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<Option<String>> {
        Ok(self.contents.get(path).cloned())
    }
}
