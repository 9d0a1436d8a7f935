//! Outline Feature Resolver Adapter
//!
//! Resolves `file:` addresses into parsed features by outline-level
//! scanning: the first `Feature:` line names the document, each
//! `Scenario:` line names a scenario, and the full content becomes the
//! feature's source identity. Grammar-level parsing of steps is left to
//! the execution engine.

use std::fs;
use std::path::Path;

use crate::domain::{Feature, FeatureLocation, FEATURE_MARKER, SCENARIO_MARKER};
use crate::ports::{FeatureResolver, ResolutionError};

const FEATURE_EXTENSION: &str = "feature";

/// Resolver for `.feature` resources on the local filesystem.
///
/// An address naming a file yields at most one candidate; an address
/// naming a directory yields one candidate per `.feature` file directly
/// inside it, in sorted order. A missing path or a file without the
/// `.feature` extension yields zero candidates, which is not an error.
#[derive(Debug, Clone, Default)]
pub struct OutlineFeatureResolver;

impl OutlineFeatureResolver {
    pub fn new() -> Self {
        Self
    }

    fn parse_candidate(&self, path: &Path) -> Result<Feature, ResolutionError> {
        let address = FeatureLocation::from_path(path);
        let source = fs::read_to_string(path).map_err(|e| ResolutionError::Unreadable {
            address: address.as_str().to_string(),
            source: e,
        })?;

        let mut name = None;
        let mut scenarios = Vec::new();
        for line in source.lines() {
            let line = line.trim_start();
            if let Some(rest) = line.strip_prefix(FEATURE_MARKER) {
                if name.is_none() {
                    name = Some(rest.trim().to_string());
                }
            } else if let Some(rest) = line.strip_prefix(SCENARIO_MARKER) {
                scenarios.push(rest.trim().to_string());
            }
        }

        let name = name.ok_or_else(|| ResolutionError::Unparseable {
            address: address.as_str().to_string(),
            reason: format!("missing '{FEATURE_MARKER}' declaration"),
        })?;
        if scenarios.is_empty() {
            return Err(ResolutionError::Unparseable {
                address: address.as_str().to_string(),
                reason: format!("no '{SCENARIO_MARKER}' entries"),
            });
        }

        Ok(Feature::new(name, address, source, scenarios))
    }

    fn is_feature_file(path: &Path) -> bool {
        path.is_file() && path.extension().is_some_and(|ext| ext == FEATURE_EXTENSION)
    }
}

impl FeatureResolver for OutlineFeatureResolver {
    fn resolve(&self, address: &FeatureLocation) -> Result<Vec<Feature>, ResolutionError> {
        let path = address.to_path().ok_or_else(|| ResolutionError::MalformedAddress {
            address: address.as_str().to_string(),
            reason: "expected a 'file:' address".to_string(),
        })?;

        if path.is_dir() {
            let mut candidates = Vec::new();
            let entries = fs::read_dir(&path).map_err(|e| ResolutionError::Unreadable {
                address: address.as_str().to_string(),
                source: e,
            })?;
            for entry in entries {
                let entry = entry.map_err(|e| ResolutionError::Unreadable {
                    address: address.as_str().to_string(),
                    source: e,
                })?;
                if Self::is_feature_file(&entry.path()) {
                    candidates.push(entry.path());
                }
            }
            // Directory iteration order is platform-defined.
            candidates.sort();
            return candidates
                .iter()
                .map(|candidate| self.parse_candidate(candidate))
                .collect();
        }

        if !Self::is_feature_file(&path) {
            return Ok(Vec::new());
        }

        Ok(vec![self.parse_candidate(&path)?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, contents: &str) -> FeatureLocation {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        FeatureLocation::from_path(&path)
    }

    #[test]
    fn resolves_a_single_feature_file() {
        let dir = tempfile::tempdir().unwrap();
        let address = write(
            dir.path(),
            "login.feature",
            "Feature: Login\nScenario: Happy path\nGiven a user\n",
        );

        let features = OutlineFeatureResolver::new().resolve(&address).unwrap();

        assert_eq!(features.len(), 1);
        assert_eq!(features[0].name(), "Login");
        assert_eq!(features[0].scenarios(), ["Happy path".to_string()]);
        assert!(features[0].source().contains("Given a user"));
    }

    #[test]
    fn missing_path_yields_zero_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let address = FeatureLocation::from_path(&dir.path().join("absent.feature"));

        let features = OutlineFeatureResolver::new().resolve(&address).unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn non_feature_extension_yields_zero_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let address = write(dir.path(), "notes.txt", "Feature: X\nScenario: Y\n");

        let features = OutlineFeatureResolver::new().resolve(&address).unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn directory_address_yields_one_candidate_per_feature_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b.feature", "Feature: B\nScenario: S\n");
        write(dir.path(), "a.feature", "Feature: A\nScenario: S\n");
        write(dir.path(), "readme.md", "not a feature");
        let address = FeatureLocation::from_path(dir.path());

        let features = OutlineFeatureResolver::new().resolve(&address).unwrap();

        let names: Vec<_> = features.iter().map(|f| f.name().to_string()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn empty_directory_yields_zero_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let address = FeatureLocation::from_path(dir.path());

        let features = OutlineFeatureResolver::new().resolve(&address).unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn document_without_declaration_is_unparseable() {
        let dir = tempfile::tempdir().unwrap();
        let address = write(dir.path(), "bare.feature", "Scenario: S\nGiven a thing\n");

        let err = OutlineFeatureResolver::new().resolve(&address).unwrap_err();
        assert!(matches!(err, ResolutionError::Unparseable { .. }));
    }

    #[test]
    fn document_without_scenarios_is_unparseable() {
        let dir = tempfile::tempdir().unwrap();
        let address = write(dir.path(), "empty.feature", "Feature: F\n");

        let err = OutlineFeatureResolver::new().resolve(&address).unwrap_err();
        assert!(matches!(err, ResolutionError::Unparseable { .. }));
    }

    #[test]
    fn non_file_address_is_malformed() {
        let address = FeatureLocation::new("classpath:app.feature");

        let err = OutlineFeatureResolver::new().resolve(&address).unwrap_err();
        assert!(matches!(err, ResolutionError::MalformedAddress { .. }));
    }
}
