//! Cached Unity Editor lookup.

use crate::discovery::{seek, FileSystem, HostFileSystem};
use crate::{
    EditorQuery, HostPlatform, LocateError, LocatorOptions, PlatformFamily, PlatformProbe,
    UnityEditorDescriptor,
};
use std::sync::OnceLock;
use tokio::sync::OnceCell;

/// Finds Unity Editors and remembers them.
///
/// The first successful [`discover`](Self::discover) scans the filesystem
/// and fills the locator's registry. Every later call, from any task,
/// returns that same list without touching the disk again, even if editors
/// were installed or removed in the meantime. Concurrent first calls share
/// a single scan. A failed scan leaves the registry empty so the next call
/// tries again.
///
/// Discovery is only supported on Windows; the platform probe is checked
/// on every call.
///
/// # Example
///
/// ```rust,no_run
/// use unity_editor_discovery::{EditorLocator, LocatorOptions};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), unity_editor_discovery::LocateError> {
///     let locator = EditorLocator::new(LocatorOptions::from_env());
///
///     for editor in locator.discover().await? {
///         println!("{} at {}", editor.version(), editor.installation_path().display());
///     }
///
///     if let Some(editor) = locator.find_best_for_year(2021).await? {
///         println!("Best 2021 editor: {}", editor.version());
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct EditorLocator<F = HostFileSystem, P = HostPlatform> {
    file_system: F,
    platform: P,
    options: LocatorOptions,
    registry: OnceCell<Vec<UnityEditorDescriptor>>,
}

impl EditorLocator {
    /// Locator for the local disk and host platform.
    pub fn new(options: LocatorOptions) -> Self {
        Self::with_collaborators(HostFileSystem, HostPlatform, options)
    }
}

impl<F: FileSystem, P: PlatformProbe> EditorLocator<F, P> {
    /// Locator with a custom filesystem and platform probe.
    pub fn with_collaborators(file_system: F, platform: P, options: LocatorOptions) -> Self {
        Self {
            file_system,
            platform,
            options,
            registry: OnceCell::new(),
        }
    }

    /// Search locations used by this locator.
    pub fn options(&self) -> &LocatorOptions {
        &self.options
    }

    /// All discovered editors, in discovery order.
    ///
    /// # Errors
    ///
    /// - [`LocateError::UnsupportedPlatform`] when the host is not Windows
    /// - [`LocateError::Io`] / [`LocateError::InvalidPattern`] when the scan
    ///   fails; nothing is cached in that case
    pub async fn discover(&self) -> Result<&[UnityEditorDescriptor], LocateError> {
        let found = self.platform.family();
        if found != PlatformFamily::Windows {
            return Err(LocateError::UnsupportedPlatform { found });
        }

        // Callers that wait inside `get_or_try_init` on a concurrent scan
        // return without this log line.
        if let Some(editors) = self.registry.get() {
            tracing::debug!("Already searched for Unity Editors. Using cached results.");
            return Ok(editors);
        }

        let editors = self
            .registry
            .get_or_try_init(|| seek(&self.file_system, &self.options))
            .await?;
        Ok(editors)
    }

    /// Editors matching `query`, best first.
    pub async fn ranked(
        &self,
        query: EditorQuery,
    ) -> Result<Vec<&UnityEditorDescriptor>, LocateError> {
        Ok(query.rank(self.discover().await?))
    }

    /// Best editor matching `query`, `None` when nothing matches.
    pub async fn find_best_matching(
        &self,
        query: EditorQuery,
    ) -> Result<Option<&UnityEditorDescriptor>, LocateError> {
        Ok(query.best(self.discover().await?))
    }

    /// Best editor overall.
    pub async fn find_best(&self) -> Result<Option<&UnityEditorDescriptor>, LocateError> {
        self.find_best_matching(EditorQuery::Any).await
    }

    /// Best editor released in `year`.
    pub async fn find_best_for_year(
        &self,
        year: u32,
    ) -> Result<Option<&UnityEditorDescriptor>, LocateError> {
        self.find_best_matching(EditorQuery::Year(year)).await
    }

    /// Best editor in `year` and `stream`, e.g. `2021` and `3` for 2021.3.
    pub async fn find_best_for_stream(
        &self,
        year: u32,
        stream: u32,
    ) -> Result<Option<&UnityEditorDescriptor>, LocateError> {
        self.find_best_matching(EditorQuery::Stream { year, stream })
            .await
    }

    /// Whether the registry has been filled.
    pub fn is_cached(&self) -> bool {
        self.registry.initialized()
    }

    /// Forget the cached editors so the next call scans again.
    pub fn reset(&mut self) {
        self.registry.take();
    }
}

fn default_locator() -> &'static EditorLocator {
    static DEFAULT: OnceLock<EditorLocator> = OnceLock::new();
    DEFAULT.get_or_init(|| EditorLocator::new(LocatorOptions::from_env()))
}

/// All Unity Editors installed on this machine.
///
/// Uses a process-wide locator built from [`LocatorOptions::from_env`], so
/// the filesystem is scanned at most once per process.
pub async fn find_unity_editors() -> Result<&'static [UnityEditorDescriptor], LocateError> {
    default_locator().discover().await
}

/// Best Unity Editor installed on this machine.
///
/// See [`EditorQuery`] for the ranking rules.
pub async fn find_unity_editor() -> Result<Option<&'static UnityEditorDescriptor>, LocateError> {
    default_locator().find_best().await
}

/// Best installed Unity Editor released in `year`.
pub async fn find_unity_editor_for_year(
    year: u32,
) -> Result<Option<&'static UnityEditorDescriptor>, LocateError> {
    default_locator().find_best_for_year(year).await
}

/// Best installed Unity Editor in `year` and `stream`.
pub async fn find_unity_editor_for_stream(
    year: u32,
    stream: u32,
) -> Result<Option<&'static UnityEditorDescriptor>, LocateError> {
    default_locator().find_best_for_stream(year, stream).await
}
