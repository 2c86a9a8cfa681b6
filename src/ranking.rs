//! Editor selection queries and their ranking order.

use crate::UnityEditorDescriptor;
use std::cmp::Ordering;

/// Which editors a lookup accepts.
///
/// Each query filters the candidates and then ranks them with these keys,
/// the lowest ranking candidate first:
///
/// 1. release stage priority (see [`UnityReleaseStage::priority`]),
/// 2. year, newest first,
/// 3. stream, highest first,
/// 4. update, highest first.
///
/// A dimension pinned by the query is dropped from the key list, so
/// [`EditorQuery::Year`] ranks by keys 1, 3, 4 and [`EditorQuery::Stream`]
/// by keys 1 and 4 only.
///
/// Candidates that compare equal keep their discovery order.
///
/// [`UnityReleaseStage::priority`]: crate::UnityReleaseStage::priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorQuery {
    /// Any installed editor.
    #[default]
    Any,
    /// Editors released in `year`.
    Year(u32),
    /// Editors in the given `year` and `stream`.
    Stream {
        /// Release year.
        year: u32,
        /// Stream within the year.
        stream: u32,
    },
}

impl EditorQuery {
    /// Whether `editor` satisfies this query's constraints.
    pub fn matches(&self, editor: &UnityEditorDescriptor) -> bool {
        let version = editor.version();
        match *self {
            Self::Any => true,
            Self::Year(year) => version.year() == year,
            Self::Stream { year, stream } => version.year() == year && version.stream() == stream,
        }
    }

    /// Ranking order between two candidates, `Less` meaning `a` is preferred.
    pub fn compare(&self, a: &UnityEditorDescriptor, b: &UnityEditorDescriptor) -> Ordering {
        let (a, b) = (a.version(), b.version());
        let by_stage = a.stage().priority().cmp(&b.stage().priority());

        match self {
            Self::Any => by_stage
                .then_with(|| b.year().cmp(&a.year()))
                .then_with(|| b.stream().cmp(&a.stream()))
                .then_with(|| b.update().cmp(&a.update())),
            Self::Year(_) => by_stage
                .then_with(|| b.stream().cmp(&a.stream()))
                .then_with(|| b.update().cmp(&a.update())),
            Self::Stream { .. } => by_stage.then_with(|| b.update().cmp(&a.update())),
        }
    }

    /// Candidates matching this query, best first.
    pub fn rank<'a, I>(&self, editors: I) -> Vec<&'a UnityEditorDescriptor>
    where
        I: IntoIterator<Item = &'a UnityEditorDescriptor>,
    {
        let mut matching: Vec<_> = editors.into_iter().filter(|e| self.matches(e)).collect();
        // Stable, so ties stay in discovery order.
        matching.sort_by(|a, b| self.compare(a, b));
        matching
    }

    /// The best candidate for this query, if any matches.
    pub fn best<'a, I>(&self, editors: I) -> Option<&'a UnityEditorDescriptor>
    where
        I: IntoIterator<Item = &'a UnityEditorDescriptor>,
    {
        // `min_by` returns the first of several equal minimums.
        editors
            .into_iter()
            .filter(|e| self.matches(e))
            .min_by(|a, b| self.compare(a, b))
    }
}
