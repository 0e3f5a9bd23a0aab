//! Block entity types, the cell-keyed block registry, and the color palette.
#![forbid(unsafe_code)]

pub mod palette;
pub mod store;
pub mod types;

pub use palette::Palette;
pub use store::BlockStore;
pub use types::{Block, BlockKind, Cell};
