//! Application layer - Orchestration of the supply pipeline.
//!
//! This layer coordinates the domain with the ports: the publisher turns a
//! normalized document into an addressable scratch resource, and the supply
//! gate drives normalize → publish → resolve → aggregate for every pull.

mod publisher;
mod supply_gate;

pub use publisher::TransientFeaturePublisher;
pub use supply_gate::{InteractiveFeatureSupplier, SubmissionHandle};
