//! Batch-mode build execution.
//!
//! This module provides [`run_build`], which launches a Unity Editor
//! headless against a project, and [`build_with_best_editor`], which picks
//! the editor first.

use crate::build::{BuildError, BuildOptions, BuildTarget};
use crate::{find_unity_editor, UnityEditorDescriptor};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tokio::time::timeout;

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Where the player was written.
    pub output: PathBuf,
    /// Editor log of the build.
    pub log_file: PathBuf,
    /// Wall-clock duration of the editor run.
    pub elapsed: Duration,
}

/// Build a Unity project with a specific editor executable.
///
/// This function:
/// 1. Checks that the project directory exists
/// 2. Runs the editor with `-batchmode -quit` and the target's player switch
/// 3. Kills the editor if it runs past `options.timeout`
/// 4. Maps a non-zero exit to [`BuildError::EditorFailed`]
///
/// # Example
///
/// ```rust,no_run
/// use std::path::{Path, PathBuf};
/// use unity_editor_discovery::{run_build, BuildOptions, BuildTarget};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let result = run_build(
///         Path::new(r"C:\Program Files\Unity\Hub\Editor\2021.3.5f1\Editor\Unity.exe"),
///         Path::new(r"C:\Projects\Game"),
///         &BuildTarget::Windows64 { output: PathBuf::from(r"C:\Builds\Game.exe") },
///         &BuildOptions::default(),
///     )
///     .await;
///
///     match result {
///         Ok(report) => println!("Built in {:?}", report.elapsed),
///         Err(e) => println!("Failed: {}. Fix: {}", e, e.fix_suggestion()),
///     }
/// }
/// ```
pub async fn run_build(
    editor: &Path,
    project: &Path,
    target: &BuildTarget,
    options: &BuildOptions,
) -> Result<BuildReport, BuildError> {
    if !project.is_dir() {
        return Err(BuildError::ProjectNotFound {
            path: project.to_path_buf(),
            fix: "Pass the directory that contains the project's Assets folder".to_string(),
        });
    }

    let log_file = options.log_file_for(project);
    let mut command = Command::new(editor);
    command
        .args(build_arguments(project, target, &log_file))
        .kill_on_drop(true)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    tracing::info!(
        editor = %editor.display(),
        project = %project.display(),
        switch = target.player_switch(),
        "Starting Unity build"
    );
    let started = Instant::now();

    let status = match timeout(options.timeout, command.status()).await {
        Ok(Ok(status)) => status,
        Ok(Err(source)) => {
            return Err(BuildError::Spawn {
                editor: editor.to_path_buf(),
                source,
                fix: "Check that the editor executable exists and can be run".to_string(),
            });
        }
        Err(_) => {
            return Err(BuildError::Timeout {
                duration: options.timeout,
                fix: format!(
                    "Build timed out after {:?}. Raise BuildOptions::timeout or check {} for a hang.",
                    options.timeout,
                    log_file.display()
                ),
            });
        }
    };

    if !status.success() {
        tracing::warn!(code = ?status.code(), log = %log_file.display(), "Unity build failed");
        return Err(BuildError::EditorFailed {
            exit_code: status.code(),
            fix: format!("See the editor log at {}", log_file.display()),
            log_file,
        });
    }

    let elapsed = started.elapsed();
    tracing::info!(?elapsed, "Unity build finished");
    Ok(BuildReport {
        output: target.output().to_path_buf(),
        log_file,
        elapsed,
    })
}

/// Build a Unity project with the best installed editor.
///
/// The editor is chosen by [`find_unity_editor`]. Discovery errors surface
/// as [`BuildError::Locate`]; finding no editor at all is
/// [`BuildError::NoEditorFound`].
pub async fn build_with_best_editor(
    project: &Path,
    target: &BuildTarget,
    options: &BuildOptions,
) -> Result<BuildReport, BuildError> {
    let editor = find_unity_editor()
        .await?
        .ok_or_else(|| BuildError::NoEditorFound {
            fix: "Install a Unity Editor through Unity Hub".to_string(),
        })?;
    editor.build(project, target, options).await
}

impl UnityEditorDescriptor {
    /// Build `project` with this editor, see [`run_build`].
    pub async fn build(
        &self,
        project: &Path,
        target: &BuildTarget,
        options: &BuildOptions,
    ) -> Result<BuildReport, BuildError> {
        run_build(self.executable_path(), project, target, options).await
    }
}

/// Command line for a headless player build.
fn build_arguments(project: &Path, target: &BuildTarget, log_file: &Path) -> Vec<OsString> {
    vec![
        "-batchmode".into(),
        "-quit".into(),
        "-projectPath".into(),
        project.into(),
        "-logFile".into(),
        log_file.into(),
        target.player_switch().into(),
        target.output().into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> BuildTarget {
        BuildTarget::Windows64 {
            output: PathBuf::from("/builds/game.exe"),
        }
    }

    #[test]
    fn test_build_arguments() {
        let args = build_arguments(
            Path::new("/projects/game"),
            &target(),
            Path::new("/projects/game/unity-build.log"),
        );
        let args: Vec<_> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            vec![
                "-batchmode",
                "-quit",
                "-projectPath",
                "/projects/game",
                "-logFile",
                "/projects/game/unity-build.log",
                "-buildWindows64Player",
                "/builds/game.exe",
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_project() {
        let result = run_build(
            Path::new("/bin/true"),
            Path::new("/definitely/not/a/project"),
            &target(),
            &BuildOptions::default(),
        )
        .await;
        assert!(matches!(result, Err(BuildError::ProjectNotFound { .. })));
    }

    #[tokio::test]
    async fn test_missing_editor() {
        let project = tempfile::tempdir().unwrap();
        let result = run_build(
            Path::new("/nonexistent/path/to/Unity.exe"),
            project.path(),
            &target(),
            &BuildOptions::default(),
        )
        .await;
        assert!(matches!(result, Err(BuildError::Spawn { .. })));
    }

    #[tokio::test]
    async fn test_successful_editor_run() {
        let editor = PathBuf::from("/bin/true");
        if editor.exists() {
            let project = tempfile::tempdir().unwrap();
            let report = run_build(&editor, project.path(), &target(), &BuildOptions::default())
                .await
                .unwrap();
            assert_eq!(report.output, PathBuf::from("/builds/game.exe"));
            assert_eq!(report.log_file, project.path().join("unity-build.log"));
        }
    }

    #[tokio::test]
    async fn test_failing_editor_run() {
        let editor = PathBuf::from("/bin/false");
        if editor.exists() {
            let project = tempfile::tempdir().unwrap();
            let result = run_build(&editor, project.path(), &target(), &BuildOptions::default()).await;
            assert!(matches!(
                result,
                Err(BuildError::EditorFailed {
                    exit_code: Some(1),
                    ..
                })
            ));
        }
    }

    #[tokio::test]
    async fn test_descriptor_build_uses_its_executable() {
        let descriptor = UnityEditorDescriptor::new(
            PathBuf::from("/nonexistent/Unity 2021.3.5f1"),
            "2021.3.5f1".parse().unwrap(),
            PathBuf::from("/nonexistent/Unity 2021.3.5f1/Editor/Unity.exe"),
        );
        let project = tempfile::tempdir().unwrap();
        let result = descriptor
            .build(project.path(), &target(), &BuildOptions::default())
            .await;
        match result {
            Err(BuildError::Spawn { editor, .. }) => {
                assert_eq!(editor, descriptor.executable_path());
            }
            other => panic!("expected spawn failure, got {other:?}"),
        }
    }
}
