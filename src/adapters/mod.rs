//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the supply core to the local filesystem:
//! - `fs_scratch` - Scratch storage under a configurable directory
//! - `outline_resolver` - Outline-level parsing of `.feature` resources

mod fs_scratch;
mod outline_resolver;

pub use fs_scratch::FsScratchStore;
pub use outline_resolver::OutlineFeatureResolver;
