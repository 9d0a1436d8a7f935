//! Domain layer containing the pure supply-pipeline logic.
//!
//! # Module Organization
//!
//! - `feature` - Parsed feature document and its location value object
//! - `stamp` - Per-pull identity shared by synthetic names and filenames
//! - `normalize` - Structural normalization of raw submissions
//! - `collection` - Deduplicating aggregation of resolved features

mod collection;
mod feature;
mod normalize;
mod stamp;

pub use collection::FeatureCollection;
pub use feature::{Feature, FeatureLocation};
pub use normalize::{normalize, NormalizedDocument, FEATURE_MARKER, SCENARIO_MARKER};
pub use stamp::PullStamp;
