//! # unity-editor-discovery
//!
//! Locate installed Unity Editors on Windows, pick the best one for a
//! project, and run headless player builds with it.
//!
//! ## Features
//!
//! - `UnityVersion` parser for tokens such as `2021.3.5f1`
//! - `EditorLocator` that scans Program Files and Unity Hub directories once
//!   and caches the result
//! - `EditorQuery` ranking: release stage first, then newest year, stream
//!   and update
//! - `find_unity_editor*()` helpers backed by a process-wide locator
//! - `run_build()` / `build_with_best_editor()` for batch-mode builds
//!
//! ## Example
//!
//! ```rust,no_run
//! use unity_editor_discovery::{find_unity_editor, find_unity_editor_for_year, find_unity_editors};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), unity_editor_discovery::LocateError> {
//!     for editor in find_unity_editors().await? {
//!         println!("{} at {}", editor.version(), editor.installation_path().display());
//!     }
//!
//!     if let Some(editor) = find_unity_editor().await? {
//!         println!("Best editor: {}", editor.version());
//!     }
//!
//!     match find_unity_editor_for_year(2021).await? {
//!         Some(editor) => println!("Best 2021 editor: {}", editor.version()),
//!         None => println!("No 2021 editor installed"),
//!     }
//!     Ok(())
//! }
//! ```

mod build;
mod descriptor;
mod discovery;
mod error;
mod locator;
mod options;
mod platform;
mod ranking;
mod release_stage;
mod version;

pub use build::{
    build_with_best_editor, run_build, BuildError, BuildOptions, BuildReport, BuildTarget,
};
pub use descriptor::UnityEditorDescriptor;
pub use discovery::{FileSystem, HostFileSystem};
pub use error::LocateError;
pub use locator::{
    find_unity_editor, find_unity_editor_for_stream, find_unity_editor_for_year,
    find_unity_editors, EditorLocator,
};
pub use options::{LocatorOptions, DEFAULT_EDITOR_EXECUTABLE};
pub use platform::{HostPlatform, PlatformFamily, PlatformProbe};
pub use ranking::EditorQuery;
pub use release_stage::UnityReleaseStage;
pub use version::{UnityVersion, VersionParseError};
