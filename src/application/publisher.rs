//! TransientFeaturePublisher - Publication of normalized submissions.

use std::sync::Arc;

use crate::domain::{FeatureLocation, NormalizedDocument, PullStamp};
use crate::ports::{PublishError, ScratchStore};

/// Publishes one normalized document per pull as a scratch resource.
///
/// The resource name comes from the same per-pull stamp the normalizer
/// used for synthetic marker names, so the published file and the names
/// inside it stay correlated for diagnostics.
pub struct TransientFeaturePublisher {
    store: Arc<dyn ScratchStore>,
}

impl TransientFeaturePublisher {
    pub fn new(store: Arc<dyn ScratchStore>) -> Self {
        Self { store }
    }

    /// Writes the document under `<token>.feature` and returns its address.
    pub fn publish(
        &self,
        stamp: &PullStamp,
        document: &NormalizedDocument,
    ) -> Result<FeatureLocation, PublishError> {
        let file_name = stamp.file_name();
        let location = self.store.write(&file_name, document.as_str())?;
        tracing::debug!(%location, "Published transient feature resource");
        Ok(location)
    }
}
