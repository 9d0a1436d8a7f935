//! Deduplicating aggregation of resolved features.

use std::collections::HashMap;

use super::{Feature, FeatureLocation};

/// Accumulates resolved features for one pull, rejecting exact
/// re-submissions.
///
/// A feature is a duplicate when an already accepted feature has the same
/// `source` and the same logical filename. Identical content under a
/// different filename is kept: build tools routinely copy feature files
/// into `target`/`build` directories, and those copies are intentional.
///
/// One collection per pull; [`FeatureCollection::build`] consumes it.
#[derive(Debug, Default)]
pub struct FeatureCollection {
    by_source: HashMap<String, HashMap<String, FeatureLocation>>,
    features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a feature unless an identical one was already accepted.
    ///
    /// Duplicates are discarded with a diagnostic log entry; this is not an
    /// error.
    pub fn add_unique(&mut self, feature: Feature) {
        let file_name = feature.logical_filename().to_string();

        if let Some(existing) = self.by_source.get(feature.source()) {
            if let Some(original) = existing.get(&file_name) {
                tracing::debug!(
                    duplicate = %feature.location(),
                    original = %original,
                    "Discarding feature identical in content and filename to an accepted one"
                );
                return;
            }
        }

        self.by_source
            .entry(feature.source().to_string())
            .or_default()
            .insert(file_name, feature.location().clone());
        self.features.push(feature);
    }

    /// Number of accepted features so far.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Returns all accepted features sorted ascending by location.
    pub fn build(self) -> Vec<Feature> {
        let mut features = self.features;
        features.sort_by(|a, b| a.location().cmp(b.location()));
        features
    }
}
