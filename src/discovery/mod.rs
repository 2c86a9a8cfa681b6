//! Filesystem scanning submodule.
//!
//! This module contains the pieces the locator uses to find installations:
//!
//! - `FileSystem`: the injectable read-only disk capability
//! - `HostFileSystem`: the real disk, walked with `glob`
//! - `seek`: one full scan producing editor descriptors

mod file_system;
mod seeker;
#[cfg(test)]
pub(crate) mod testing;

pub use file_system::{FileSystem, HostFileSystem};
pub(crate) use seeker::seek;
