//! Release stage of a Unity Editor build.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Maturity classification of a Unity release.
///
/// The stage is encoded as a single letter in the version token, e.g. the
/// `f` in `2021.3.5f1`. Letters other than `a`, `b`, `f` and `p` (or no
/// letter at all) land in [`UnityReleaseStage::Unknown`].
///
/// # Example
///
/// ```rust
/// use unity_editor_discovery::UnityReleaseStage;
///
/// assert_eq!(UnityReleaseStage::from_code('f'), UnityReleaseStage::Final);
/// assert_eq!(UnityReleaseStage::from_code('x'), UnityReleaseStage::Unknown);
/// assert!(UnityReleaseStage::Final.priority() < UnityReleaseStage::Beta.priority());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum UnityReleaseStage {
    /// Early preview build (`a`).
    Alpha,
    /// Public beta (`b`).
    Beta,
    /// Final release (`f`).
    Final,
    /// Patch release (`p`).
    Patch,
    /// Missing or unrecognised stage letter.
    Unknown,
}

impl UnityReleaseStage {
    /// Map a stage letter to its stage.
    pub fn from_code(code: char) -> Self {
        match code {
            'a' => Self::Alpha,
            'b' => Self::Beta,
            'f' => Self::Final,
            'p' => Self::Patch,
            _ => Self::Unknown,
        }
    }

    /// The canonical letter for this stage, `None` for [`Self::Unknown`].
    pub fn code(&self) -> Option<char> {
        match self {
            Self::Alpha => Some('a'),
            Self::Beta => Some('b'),
            Self::Final => Some('f'),
            Self::Patch => Some('p'),
            Self::Unknown => None,
        }
    }

    /// Selection priority when ranking editors. Lower is preferred.
    ///
    /// Final and Patch share the top rank; an unrecognised stage sits
    /// between them and Beta.
    pub fn priority(&self) -> u8 {
        match self {
            Self::Final | Self::Patch => 1,
            Self::Unknown => 2,
            Self::Beta => 3,
            Self::Alpha => 4,
        }
    }

    /// Iterator over all stages.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
