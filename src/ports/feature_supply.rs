//! Feature Supply Port - Consumer-facing supply interface.
//!
//! This is the surface the test execution engine polls. The interactive
//! supplier in the application layer implements it; an engine only ever
//! sees this trait.

use thiserror::Error;

use super::{PublishError, ResolutionError};
use crate::domain::Feature;

/// Failure of a single pull.
///
/// Both variants abort only the pull that raised them; the next pull
/// starts from a clean state.
#[derive(Debug, Error)]
pub enum SupplyError {
    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

/// Port for pull-based, on-demand supply of feature documents.
///
/// # Contract
///
/// - `pull` blocks until a submission is available or the session ends;
///   each call yields one submission's worth of features, or an empty
///   sequence once the supply has terminated
/// - `is_continuous` declares whether more than one batch may be yielded
///   over the supplier's lifetime
/// - `should_stop` reflects whether the supply has terminated; once true,
///   every subsequent `pull` returns an empty sequence without blocking
pub trait FeatureSupply: Send {
    /// Blocks for the next submission and returns its resolved features.
    fn pull(&self) -> Result<Vec<Feature>, SupplyError>;

    /// True when this supplier yields more than one batch over its lifetime.
    fn is_continuous(&self) -> bool;

    /// True once the supply has terminated.
    fn should_stop(&self) -> bool;
}
