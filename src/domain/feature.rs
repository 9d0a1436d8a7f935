//! Parsed feature document and its location value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// URI-like address of a feature resource.
///
/// Locations order lexicographically, which is the order aggregated
/// features are returned in. The last path segment of the scheme-specific
/// part is the feature's logical filename, used as a secondary
/// deduplication key alongside content identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureLocation(String);

impl FeatureLocation {
    /// Creates a location from a URI-like string.
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Creates a `file:` location for a filesystem path.
    pub fn from_path(path: &Path) -> Self {
        Self(format!("file:{}", path.display()))
    }

    /// Returns the location as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the part after the scheme, or the whole string when the
    /// location carries no scheme.
    pub fn scheme_specific_part(&self) -> &str {
        match self.0.split_once(':') {
            Some((_, rest)) => rest,
            None => &self.0,
        }
    }

    /// Returns the final path segment of the scheme-specific part.
    ///
    /// When no separator is present the whole scheme-specific part is the
    /// logical filename.
    pub fn logical_filename(&self) -> &str {
        let part = self.scheme_specific_part();
        match part.rsplit_once('/') {
            Some((_, name)) => name,
            None => part,
        }
    }

    /// Returns the filesystem path for a `file:` location.
    pub fn to_path(&self) -> Option<PathBuf> {
        self.0.strip_prefix("file:").map(PathBuf::from)
    }
}

impl fmt::Display for FeatureLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A parsed feature document.
///
/// `source` is the document's full textual content and serves as its
/// equality identity for deduplication; `location` is where the document
/// was resolved from. The declaration name and scenario names are the
/// outline-level structure the resolution pipeline extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    name: String,
    location: FeatureLocation,
    source: String,
    scenarios: Vec<String>,
}

impl Feature {
    pub fn new(
        name: impl Into<String>,
        location: FeatureLocation,
        source: impl Into<String>,
        scenarios: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            source: source.into(),
            scenarios,
        }
    }

    /// The declaration name of the feature.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved location of the feature.
    pub fn location(&self) -> &FeatureLocation {
        &self.location
    }

    /// The full textual content, the feature's identity for deduplication.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Names of the scenarios found in the document.
    pub fn scenarios(&self) -> &[String] {
        &self.scenarios
    }

    /// The final path segment of the location.
    pub fn logical_filename(&self) -> &str {
        self.location.logical_filename()
    }
}
