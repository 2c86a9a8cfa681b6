//! Unity version tokens and their parser.

use crate::UnityReleaseStage;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Year, stream, update, then an optional stage letter with its suffix.
const VERSION_PATTERN: &str =
    r"^(?P<year>\d{4})\.(?P<stream>\d)\.(?P<update>\d+)(?:(?P<stage>[A-Za-z])(?P<suffix>[0-9A-Za-z]*))?$";

fn version_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(VERSION_PATTERN).expect("Invalid regex pattern"))
}

/// Errors produced when a token is not a Unity version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VersionParseError {
    /// The token does not follow the `YYYY.S.U[stage][suffix]` grammar.
    #[error("`{token}` is not a Unity version")]
    Malformed {
        /// The rejected token.
        token: String,
    },

    /// A numeric field matched the grammar but does not fit in a `u32`.
    #[error("{field} in `{token}` is out of range")]
    OutOfRange {
        /// The rejected token.
        token: String,
        /// Name of the offending field.
        field: &'static str,
    },
}

/// A parsed Unity Editor version such as `2021.3.5f1`.
///
/// There is deliberately no `Ord` implementation: which editor is "better"
/// depends on the query, see [`EditorQuery`](crate::EditorQuery).
///
/// # Example
///
/// ```rust
/// use unity_editor_discovery::{UnityReleaseStage, UnityVersion};
///
/// let version: UnityVersion = "2021.3.5f1".parse().unwrap();
/// assert_eq!(version.year(), 2021);
/// assert_eq!(version.stream(), 3);
/// assert_eq!(version.update(), 5);
/// assert_eq!(version.stage(), UnityReleaseStage::Final);
/// assert_eq!(version.suffix(), Some("1"));
/// assert_eq!(version.to_string(), "2021.3.5f1");
/// ```
///
/// Serialized as its token, so deserializing goes through the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UnityVersion {
    year: u32,
    stream: u32,
    update: u32,
    stage: UnityReleaseStage,
    stage_code: Option<char>,
    suffix: Option<String>,
}

impl UnityVersion {
    /// Build a version without a suffix.
    pub fn new(year: u32, stream: u32, update: u32, stage: UnityReleaseStage) -> Self {
        Self {
            year,
            stream,
            update,
            stage,
            stage_code: stage.code(),
            suffix: None,
        }
    }

    /// Attach a trailing suffix, e.g. the `1` of `f1`.
    ///
    /// Fails when the result would not print back as the same version:
    /// a version without a stage letter cannot carry a suffix, and the
    /// suffix must be alphanumeric.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Result<Self, VersionParseError> {
        let suffix = suffix.into();
        self.suffix = (!suffix.is_empty()).then_some(suffix);

        let token = self.to_string();
        match Self::parse(&token) {
            Ok(parsed) if parsed == self => Ok(self),
            _ => Err(VersionParseError::Malformed { token }),
        }
    }

    /// Parse a version token.
    ///
    /// Leading and trailing whitespace is ignored. Anything else that does
    /// not follow the grammar is rejected, including numeric fields that
    /// overflow.
    pub fn parse(token: &str) -> Result<Self, VersionParseError> {
        let trimmed = token.trim();
        let caps = version_regex()
            .captures(trimmed)
            .ok_or_else(|| VersionParseError::Malformed {
                token: token.to_string(),
            })?;

        let number = |field: &'static str| -> Result<u32, VersionParseError> {
            caps[field]
                .parse()
                .map_err(|_| VersionParseError::OutOfRange {
                    token: token.to_string(),
                    field,
                })
        };

        let stage_code = caps
            .name("stage")
            .and_then(|m| m.as_str().chars().next());

        Ok(Self {
            year: number("year")?,
            stream: number("stream")?,
            update: number("update")?,
            stage: stage_code.map_or(UnityReleaseStage::Unknown, UnityReleaseStage::from_code),
            stage_code,
            suffix: caps
                .name("suffix")
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        })
    }

    /// Release year, e.g. `2021`.
    pub fn year(&self) -> u32 {
        self.year
    }

    /// Stream within the year, e.g. the `3` of `2021.3`.
    pub fn stream(&self) -> u32 {
        self.stream
    }

    /// Update counter within the stream.
    pub fn update(&self) -> u32 {
        self.update
    }

    /// Release stage.
    pub fn stage(&self) -> UnityReleaseStage {
        self.stage
    }

    /// Trailing build suffix after the stage letter, if any.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }
}

impl FromStr for UnityVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for UnityVersion {
    type Error = VersionParseError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::parse(&token)
    }
}

impl From<UnityVersion> for String {
    fn from(version: UnityVersion) -> Self {
        version.to_string()
    }
}

impl fmt::Display for UnityVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.year, self.stream, self.update)?;
        if let Some(code) = self.stage_code {
            write!(f, "{code}")?;
        }
        if let Some(suffix) = &self.suffix {
            f.write_str(suffix)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(token: &str) -> UnityVersion {
        UnityVersion::parse(token).unwrap()
    }

    #[test]
    fn test_parse_final() {
        let version = parse("2021.3.5f1");
        assert_eq!(version.year(), 2021);
        assert_eq!(version.stream(), 3);
        assert_eq!(version.update(), 5);
        assert_eq!(version.stage(), UnityReleaseStage::Final);
        assert_eq!(version.suffix(), Some("1"));
    }

    #[test]
    fn test_parse_alpha() {
        let version = parse("2020.1.0a7");
        assert_eq!(version.year(), 2020);
        assert_eq!(version.stream(), 1);
        assert_eq!(version.update(), 0);
        assert_eq!(version.stage(), UnityReleaseStage::Alpha);
        assert_eq!(version.suffix(), Some("7"));
    }

    #[test]
    fn test_parse_beta_and_patch() {
        assert_eq!(parse("2019.3.0b12").stage(), UnityReleaseStage::Beta);
        assert_eq!(parse("2017.4.3p2").stage(), UnityReleaseStage::Patch);
    }

    #[test]
    fn test_parse_without_stage() {
        let version = parse("2018.2.14");
        assert_eq!(version.stage(), UnityReleaseStage::Unknown);
        assert_eq!(version.suffix(), None);
        assert_eq!(version.to_string(), "2018.2.14");
    }

    #[test]
    fn test_parse_unrecognised_stage() {
        let version = parse("2019.4.40x3");
        assert_eq!(version.stage(), UnityReleaseStage::Unknown);
        assert_eq!(version.suffix(), Some("3"));
        assert_eq!(version.to_string(), "2019.4.40x3");
    }

    #[test]
    fn test_parse_alphanumeric_suffix() {
        let version = parse("2019.4.40f1c1");
        assert_eq!(version.stage(), UnityReleaseStage::Final);
        assert_eq!(version.suffix(), Some("1c1"));
    }

    #[test]
    fn test_parse_odd_but_well_formed() {
        let version = parse("2030.9.999f1");
        assert_eq!(version.stream(), 9);
        assert_eq!(version.update(), 999);
    }

    #[test]
    fn test_parse_unity_6_numbering() {
        let version = parse("6000.0.23f1");
        assert_eq!(version.year(), 6000);
        assert_eq!(version.stream(), 0);
        assert_eq!(version.update(), 23);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse("  2022.1.0f1\n"), parse("2022.1.0f1"));
    }

    #[test]
    fn test_parse_malformed() {
        for token in [
            "",
            "Unity",
            "2021",
            "2021.3",
            "2021-3-5f1",
            "2021.3.5 f1",
            "21.3.5f1",
            "2021.10.5f1",
            "2021.x.5f1",
            "2021.3.f1",
            "2021.3.5f1-beta",
        ] {
            assert!(
                matches!(
                    UnityVersion::parse(token),
                    Err(VersionParseError::Malformed { .. })
                ),
                "expected `{token}` to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_update_overflow() {
        let result = UnityVersion::parse("2021.3.99999999999f1");
        assert_eq!(
            result,
            Err(VersionParseError::OutOfRange {
                token: "2021.3.99999999999f1".to_string(),
                field: "update",
            })
        );
    }

    #[test]
    fn test_display_roundtrip() {
        for token in ["2021.3.5f1", "2020.1.0a7", "2017.4.3p2", "2019.4.40f1c1"] {
            assert_eq!(parse(token).to_string(), token);
        }
    }

    #[test]
    fn test_new_and_with_suffix() {
        let version = UnityVersion::new(2022, 1, 0, UnityReleaseStage::Final)
            .with_suffix("1")
            .unwrap();
        assert_eq!(version, parse("2022.1.0f1"));

        let bare = UnityVersion::new(2022, 1, 0, UnityReleaseStage::Final)
            .with_suffix("")
            .unwrap();
        assert_eq!(bare.suffix(), None);
    }

    #[test]
    fn test_with_suffix_rejects_unprintable_versions() {
        // Without a stage letter the suffix would merge into the update.
        let result = UnityVersion::new(2021, 3, 5, UnityReleaseStage::Unknown).with_suffix("1");
        assert_eq!(
            result,
            Err(VersionParseError::Malformed {
                token: "2021.3.51".to_string(),
            })
        );

        let result = UnityVersion::new(2021, 3, 5, UnityReleaseStage::Final).with_suffix("1-rc");
        assert!(matches!(result, Err(VersionParseError::Malformed { .. })));
    }

    #[test]
    fn test_every_constructor_roundtrips_through_display() {
        let mut versions: Vec<UnityVersion> = ["2021.3.5f1", "2018.2.14", "2019.4.40x3", "2021.3.5F1"]
            .into_iter()
            .map(parse)
            .collect();
        for stage in UnityReleaseStage::all() {
            let version = UnityVersion::new(2021, 3, 5, stage);
            versions.push(version.clone());
            if let Ok(with_suffix) = version.with_suffix("2") {
                versions.push(with_suffix);
            }
        }

        for version in versions {
            assert_eq!(parse(&version.to_string()), version);
        }
    }

    #[test]
    fn test_parse_uppercase_stage_is_unknown() {
        let version = parse("2021.3.5F1");
        assert_eq!(version.stage(), UnityReleaseStage::Unknown);
        assert_eq!(version.suffix(), Some("1"));
        assert_eq!(version.to_string(), "2021.3.5F1");
    }

    #[test]
    fn test_serde_uses_token() {
        let version = parse("2022.1.1b2");
        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(json, "\"2022.1.1b2\"");
        let back: UnityVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, version);
    }

    #[test]
    fn test_serde_rejects_invalid_tokens() {
        assert!(serde_json::from_str::<UnityVersion>("\"2022.1\"").is_err());
        let inconsistent = r#"{"year":2022,"stream":1,"update":0,"stage":"Final","stage_code":"b","suffix":null}"#;
        assert!(serde_json::from_str::<UnityVersion>(inconsistent).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = UnityVersion::parse("nope").unwrap_err();
        assert_eq!(error.to_string(), "`nope` is not a Unity version");
    }
}
