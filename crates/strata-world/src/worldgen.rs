use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Generation parameters for a world instance. Every field has a default
/// so a partial (or absent) TOML file yields a playable world.
#[derive(Clone, Debug, Deserialize)]
pub struct WorldGenConfig {
    /// Side length of one grid block, in world units.
    #[serde(default = "default_block_size")]
    pub block_size: i32,
    /// Ground rows materialized below the surface of every column.
    #[serde(default = "default_terrain_depth")]
    pub terrain_depth: i32,
    #[serde(default)]
    pub height: Height,
    #[serde(default)]
    pub trees: Trees,
    #[serde(default)]
    pub leaves: Leaves,
    #[serde(default)]
    pub window: Window,
}

fn default_block_size() -> i32 {
    30
}
fn default_terrain_depth() -> i32 {
    20
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            block_size: default_block_size(),
            terrain_depth: default_terrain_depth(),
            height: Height::default(),
            trees: Trees::default(),
            leaves: Leaves::default(),
            window: Window::default(),
        }
    }
}

impl WorldGenConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Height {
    /// Noise frequency in column units.
    #[serde(default = "default_height_freq")]
    pub frequency: f32,
    /// Peak deviation of the surface from the baseline, in world units.
    #[serde(default = "default_height_amplitude")]
    pub amplitude: f32,
}
fn default_height_freq() -> f32 {
    0.02
}
fn default_height_amplitude() -> f32 {
    140.0
}
impl Default for Height {
    fn default() -> Self {
        Self {
            frequency: default_height_freq(),
            amplitude: default_height_amplitude(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Trees {
    /// A column hosts a tree with probability `1 / modulus`.
    #[serde(default = "default_tree_modulus")]
    pub modulus: u32,
    /// Shortest trunk, in blocks.
    #[serde(default = "default_trunk_min")]
    pub trunk_min: i32,
    /// Trunk height is uniform in `[trunk_min, trunk_min + trunk_span)`.
    #[serde(default = "default_trunk_span")]
    pub trunk_span: u32,
    /// Canopy width as a fraction of trunk height, rounded up to odd.
    #[serde(default = "default_canopy_ratio")]
    pub canopy_ratio: f32,
    /// A canopy cell holds a leaf with probability `1 - 1 / leaf_modulus`.
    #[serde(default = "default_leaf_modulus")]
    pub leaf_modulus: u32,
}
fn default_tree_modulus() -> u32 {
    9
}
fn default_trunk_min() -> i32 {
    9
}
fn default_trunk_span() -> u32 {
    5
}
fn default_canopy_ratio() -> f32 {
    2.0 / 3.0
}
fn default_leaf_modulus() -> u32 {
    4
}
impl Default for Trees {
    fn default() -> Self {
        Self {
            modulus: default_tree_modulus(),
            trunk_min: default_trunk_min(),
            trunk_span: default_trunk_span(),
            canopy_ratio: default_canopy_ratio(),
            leaf_modulus: default_leaf_modulus(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Leaves {
    /// Upper bound on the one-shot delay before a leaf starts falling.
    #[serde(default = "default_fall_delay_max")]
    pub fall_delay_max: f32,
    /// Downward velocity of a falling leaf, world units per time unit.
    #[serde(default = "default_fall_speed")]
    pub fall_speed: f32,
    /// Duration of each fade-out and fade-in.
    #[serde(default = "default_fade_time")]
    pub fade_time: f32,
    /// Oscillation swings the render angle within `±sway_deg` degrees.
    #[serde(default = "default_sway_deg")]
    pub sway_deg: f32,
    /// Oscillation scales the leaf within `1 ± scale_jitter`.
    #[serde(default = "default_scale_jitter")]
    pub scale_jitter: f32,
    /// Oscillation periods are whole time units in `[1, sway_period_max]`.
    #[serde(default = "default_sway_period_max")]
    pub sway_period_max: u32,
}
fn default_fall_delay_max() -> f32 {
    300.0
}
fn default_fall_speed() -> f32 {
    30.0
}
fn default_fade_time() -> f32 {
    3.0
}
fn default_sway_deg() -> f32 {
    5.0
}
fn default_scale_jitter() -> f32 {
    0.01
}
fn default_sway_period_max() -> u32 {
    3
}
impl Default for Leaves {
    fn default() -> Self {
        Self {
            fall_delay_max: default_fall_delay_max(),
            fall_speed: default_fall_speed(),
            fade_time: default_fade_time(),
            sway_deg: default_sway_deg(),
            scale_jitter: default_scale_jitter(),
            sway_period_max: default_sway_period_max(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Window {
    /// Blocks materialized beyond each viewport edge at startup.
    #[serde(default = "default_outside_blocks")]
    pub outside_blocks: i32,
    /// Inward safety margin between an eviction boundary and the
    /// generation frontier, in blocks.
    #[serde(default = "default_inset_blocks")]
    pub inset_blocks: i32,
}
fn default_outside_blocks() -> i32 {
    4
}
fn default_inset_blocks() -> i32 {
    6
}
impl Default for Window {
    fn default() -> Self {
        Self {
            outside_blocks: default_outside_blocks(),
            inset_blocks: default_inset_blocks(),
        }
    }
}
