//! Normalization of raw submissions into structurally parseable text.

use serde::{Deserialize, Serialize};

use super::PullStamp;

/// Top-level declaration marker of a feature document.
pub const FEATURE_MARKER: &str = "Feature:";

/// Scenario marker of a feature document.
pub const SCENARIO_MARKER: &str = "Scenario:";

/// Text guaranteed to contain both the declaration and a scenario marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedDocument(String);

impl NormalizedDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Makes a raw submission structurally parseable.
///
/// Missing markers are synthesized from the pull's stamp and prepended
/// ahead of the original text: declaration line first, scenario line
/// second, original text unchanged. Marker presence is a literal substring
/// check; no grammar-level parsing happens here.
pub fn normalize(text: &str, stamp: &PullStamp) -> NormalizedDocument {
    let mut prefix = String::new();

    if !text.contains(FEATURE_MARKER) {
        prefix.push_str(FEATURE_MARKER);
        prefix.push(' ');
        prefix.push_str(&stamp.synthetic_name("Feature"));
        prefix.push('\n');
    }

    if !text.contains(SCENARIO_MARKER) {
        prefix.push_str(SCENARIO_MARKER);
        prefix.push(' ');
        prefix.push_str(&stamp.synthetic_name("Scenario"));
        prefix.push('\n');
    }

    NormalizedDocument(format!("{prefix}{text}"))
}
