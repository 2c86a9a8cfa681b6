//! Errors raised while locating Unity Editors.

use crate::PlatformFamily;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a discovery attempt.
///
/// None of these are cached: after an error the next call scans again.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LocateError {
    /// Discovery was requested on a host other than Windows.
    #[error("Cannot locate Unity Editors. Only Windows platform is supported, current platform is {found}.")]
    UnsupportedPlatform {
        /// Family reported by the platform probe.
        found: PlatformFamily,
    },

    /// A search pattern could not be compiled.
    #[error("Invalid search pattern `{pattern}`: {message}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Parser message.
        message: String,
    },

    /// The filesystem could not be read while scanning.
    #[error("I/O error while scanning {}: {source}", .path.display())]
    Io {
        /// Path being read when the error occurred.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}
