//! Dot-delimited version parsing and ordering.
//!
//! Release listings publish versions as strings (`"1.2.3"`, tagged releases
//! conventionally as `"v1.2.3"`). This module turns those strings into an
//! ordered sequence of non-negative integers and answers the only question
//! the update check asks: is one version strictly newer than another?
//!
//! ## Parsing Rules
//!
//! - Every dot-separated component must parse as a non-negative integer;
//!   a single bad component rejects the whole string rather than being
//!   silently skipped.
//! - At least one component is required (`""` and `"v"` are not versions).
//! - There is no upper bound on the number of components: `"1.2"`,
//!   `"1.2.3"` and `"1.2.3.4.5"` are all valid shapes.
//! - Release tags may carry exactly one leading non-digit character
//!   (`"v2.0.0"`); [`Version::from_tag`] strips it before parsing, and a tag
//!   that starts with a digit is parsed as-is.
//!
//! Pre-release and build-metadata suffixes (`"1.2.3-rc1"`) are deliberately
//! unsupported; such tags fail to parse.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// An application version as an ordered sequence of non-negative integers.
///
/// Serializes transparently as a JSON array of integers (`[1, 2, 3]`), which
/// is the shape the persistent flag store records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// Parses a plain dot-delimited version string such as `"1.2.3"`.
    ///
    /// Returns `None` if any component fails to parse as a non-negative
    /// integer, including empty components produced by stray dots
    /// (`"1..2"`, `"1.2."`).
    pub fn parse(raw: &str) -> Option<Self> {
        // `split('.')` always yields at least one part, so a successful
        // parse is guaranteed to hold at least one component.
        let components = raw.split('.').map(|part| part.parse::<u64>().ok()).collect::<Option<Vec<u64>>>()?;
        Some(Self { components })
    }

    /// Parses a release tag, tolerating one leading non-digit prefix character.
    ///
    /// `"v2.0.0"` parses identically to `"2.0.0"`; a tag that already starts
    /// with a digit is passed through unchanged. Only a single character is
    /// stripped: `"rel-1.2"` becomes `"el-1.2"` and fails to parse.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let raw = tag.strip_prefix(|c: char| !c.is_ascii_digit()).unwrap_or(tag);
        Self::parse(raw)
    }

    /// The version components, most significant first.
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Number of components in this version.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Whether this version is strictly newer than `other`.
    ///
    /// Components are compared left to right, most significant first; the
    /// first strict inequality decides the outcome and everything after it is
    /// ignored. Full equality over the shared length is "not newer". Callers
    /// compare equally shaped versions; with differing shapes the extra
    /// trailing components of the longer side never participate.
    pub fn is_newer_than(&self, other: &Version) -> bool {
        for (ours, theirs) in self.components.iter().zip(other.components.iter()) {
            match ours.cmp(theirs) {
                Ordering::Greater => return true,
                Ordering::Less => return false,
                Ordering::Equal => {}
            }
        }
        false
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.components.iter().map(u64::to_string).collect::<Vec<_>>().join(".");
        f.write_str(&rendered)
    }
}
