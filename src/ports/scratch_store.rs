//! Scratch Store Port - Transient storage interface.
//!
//! This port defines the contract for placing normalized submission text
//! where the resolution pipeline can address it. The application layer
//! depends on this trait, while adapters (like `FsScratchStore`) provide
//! the implementation.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::FeatureLocation;

/// Errors raised while publishing a scratch resource.
///
/// Fatal to the current pull only; the gate stays usable for subsequent
/// pulls.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Scratch directory '{path}' is not available: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write scratch resource '{name}': {source}")]
    WriteFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Port for transient storage of submission text.
///
/// # Contract
///
/// Implementations must:
/// - Write the contents verbatim as UTF-8 under the given file name
/// - Never overwrite: callers supply a fresh name per pull
/// - Return an address the resolution pipeline can resolve
///
/// Lifecycle of the underlying storage is the implementation's concern;
/// this core never deletes what it publishes.
pub trait ScratchStore: Send + Sync {
    /// Writes `contents` under `file_name` and returns its address.
    fn write(&self, file_name: &str, contents: &str) -> Result<FeatureLocation, PublishError>;
}
