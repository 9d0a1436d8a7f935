//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the supply core and the outside world. Adapters implement these ports.
//!
//! - `ScratchStore` - Transient storage for normalized submission text
//! - `FeatureResolver` - Resolution of an address into parsed features
//! - `FeatureSupply` - The pull-based surface the execution engine polls

mod feature_resolver;
mod feature_supply;
mod scratch_store;

pub use feature_resolver::{FeatureResolver, ResolutionError};
pub use feature_supply::{FeatureSupply, SupplyError};
pub use scratch_store::{PublishError, ScratchStore};
