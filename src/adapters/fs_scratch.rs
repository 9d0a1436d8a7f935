//! Filesystem Scratch Store Adapter
//!
//! Writes published submissions into a scratch directory, one new file per
//! pull. Files are never overwritten or cleaned up by this adapter; the
//! scratch area's lifecycle belongs to the operating system.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SupplyConfig;
use crate::domain::FeatureLocation;
use crate::ports::{PublishError, ScratchStore};

/// Filesystem-backed scratch storage.
#[derive(Debug, Clone)]
pub struct FsScratchStore {
    scratch_dir: PathBuf,
}

impl FsScratchStore {
    /// Creates a store rooted at the given scratch directory.
    ///
    /// The directory is created on first write, not here.
    pub fn new<P: AsRef<Path>>(scratch_dir: P) -> Self {
        Self {
            scratch_dir: scratch_dir.as_ref().to_path_buf(),
        }
    }

    /// Creates a store rooted at the configured scratch directory.
    pub fn from_config(config: &SupplyConfig) -> Self {
        Self::new(&config.scratch_dir)
    }

    fn resource_path(&self, file_name: &str) -> PathBuf {
        self.scratch_dir.join(file_name)
    }
}

impl ScratchStore for FsScratchStore {
    fn write(&self, file_name: &str, contents: &str) -> Result<FeatureLocation, PublishError> {
        fs::create_dir_all(&self.scratch_dir).map_err(|e| PublishError::DirectoryUnavailable {
            path: self.scratch_dir.clone(),
            source: e,
        })?;

        let path = self.resource_path(file_name);
        fs::write(&path, contents).map_err(|e| PublishError::WriteFailed {
            name: file_name.to_string(),
            source: e,
        })?;

        Ok(FeatureLocation::from_path(&path))
    }
}
