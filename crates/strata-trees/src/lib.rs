//! Tree placement: per-column trunk decisions with adjacency suppression,
//! canopy layout, and the per-leaf animation state machine.
#![forbid(unsafe_code)]

pub mod leaf;
pub mod placer;

pub use leaf::{Leaf, LeafId, LeafPhase, LeafStore};
pub use placer::TreePlacer;
