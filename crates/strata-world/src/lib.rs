//! Height field, worldgen parameters, and terrain-block generation.
#![forbid(unsafe_code)]

pub mod height;
pub mod rng;
pub mod terrain;
pub mod worldgen;

pub use height::HeightMap;
pub use rng::ColumnRng;
pub use terrain::Terrain;
pub use worldgen::WorldGenConfig;
