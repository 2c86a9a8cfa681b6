//! Headless Unity player builds.
//!
//! A thin wrapper over the editor's command line: pick an editor, point it
//! at a project and a [`BuildTarget`], and report the exit status.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::{Path, PathBuf};
//! use unity_editor_discovery::{build_with_best_editor, BuildOptions, BuildTarget};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let target = BuildTarget::Windows64 { output: PathBuf::from(r"C:\Builds\Game.exe") };
//!     match build_with_best_editor(Path::new(r"C:\Projects\Game"), &target, &BuildOptions::default()).await {
//!         Ok(report) => println!("Player written to {}", report.output.display()),
//!         Err(e) => eprintln!("{e}\n  fix: {}", e.fix_suggestion()),
//!     }
//! }
//! ```

mod errors;
mod runner;
mod target;

pub use errors::BuildError;
pub use runner::{build_with_best_editor, run_build, BuildReport};
pub use target::{BuildOptions, BuildTarget};
