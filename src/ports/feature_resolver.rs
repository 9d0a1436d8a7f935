//! Feature Resolver Port - Resource resolution interface.
//!
//! This port defines the contract for turning a published resource address
//! into zero-or-more parsed features. The supply gate consumes it; adapters
//! (like `OutlineFeatureResolver`) provide the implementation.

use thiserror::Error;

use crate::domain::{Feature, FeatureLocation};

/// Errors raised by the resolution pipeline.
///
/// Fatal to the current pull only; no retries are attempted.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Malformed resource address '{address}': {reason}")]
    MalformedAddress { address: String, reason: String },

    #[error("Failed to read resource at '{address}': {source}")]
    Unreadable {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Resource at '{address}' is not parseable: {reason}")]
    Unparseable { address: String, reason: String },
}

/// Port for discovering and parsing feature resources.
///
/// # Contract
///
/// Implementations must:
/// - Map an address to its candidate resources (a file, or the entries of
///   a directory); zero candidates is a valid outcome, not an error
/// - Parse every candidate into a [`Feature`] carrying the full content as
///   its `source` and the candidate's address as its `location`
/// - Reject malformed addresses with [`ResolutionError::MalformedAddress`]
pub trait FeatureResolver: Send + Sync {
    /// Resolves an address into zero-or-more parsed features.
    fn resolve(&self, address: &FeatureLocation) -> Result<Vec<Feature>, ResolutionError>;
}
