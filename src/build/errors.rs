//! Error types for batch-mode builds.
//!
//! Each variant that can be acted on carries a `fix` suggestion.

use crate::LocateError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while building a Unity project.
///
/// # Example
///
/// ```rust
/// use unity_editor_discovery::BuildError;
///
/// fn report(error: BuildError) {
///     eprintln!("Build failed: {}", error);
///     eprintln!("To fix: {}", error.fix_suggestion());
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// Editor discovery failed.
    #[error(transparent)]
    Locate(#[from] LocateError),

    /// No installed editor matched.
    #[error("No Unity Editor found")]
    NoEditorFound {
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The project directory does not exist.
    #[error("Unity project not found: {}", .path.display())]
    ProjectNotFound {
        /// The missing project path.
        path: PathBuf,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The editor process could not be started.
    #[error("Failed to start Unity Editor {}: {source}", .editor.display())]
    Spawn {
        /// Editor executable.
        editor: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The build ran past its timeout and was killed.
    #[error("Unity build timed out after {duration:?}")]
    Timeout {
        /// How long the build was allowed to run.
        duration: Duration,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The editor exited unsuccessfully.
    #[error("Unity Editor exited with {}", describe_exit(.exit_code))]
    EditorFailed {
        /// Exit code, `None` when terminated by a signal.
        exit_code: Option<i32>,
        /// Editor log of the failed build.
        log_file: PathBuf,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code".to_string(),
    }
}

impl BuildError {
    /// An actionable suggestion for fixing this error.
    pub fn fix_suggestion(&self) -> &str {
        match self {
            Self::Locate(LocateError::UnsupportedPlatform { .. }) => {
                "Run the build on a Windows host or pass the editor explicitly"
            }
            Self::Locate(_) => "Check that the Unity install directories are readable",
            Self::NoEditorFound { fix, .. } => fix,
            Self::ProjectNotFound { fix, .. } => fix,
            Self::Spawn { fix, .. } => fix,
            Self::Timeout { fix, .. } => fix,
            Self::EditorFailed { fix, .. } => fix,
        }
    }
}
