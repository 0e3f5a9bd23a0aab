use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::types::BlockKind;

/// Base colors for the three block kinds plus a jitter amplitude, loadable
/// from TOML. Rendering is a consumer concern; the palette only answers
/// "what color is the block at this cell" deterministically.
#[derive(Clone, Debug, Deserialize)]
pub struct Palette {
    #[serde(default = "default_ground")]
    pub ground: [u8; 3],
    #[serde(default = "default_trunk")]
    pub trunk: [u8; 3],
    #[serde(default = "default_leaf")]
    pub leaf: [u8; 3],
    /// Maximum per-channel deviation applied by `tint`.
    #[serde(default = "default_jitter")]
    pub jitter: u8,
}

fn default_ground() -> [u8; 3] {
    [212, 123, 74]
}
fn default_trunk() -> [u8; 3] {
    [100, 50, 20]
}
fn default_leaf() -> [u8; 3] {
    [50, 200, 30]
}
fn default_jitter() -> u8 {
    10
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ground: default_ground(),
            trunk: default_trunk(),
            leaf: default_leaf(),
            jitter: default_jitter(),
        }
    }
}

impl Palette {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    #[inline]
    pub fn base(&self, kind: BlockKind) -> [u8; 3] {
        match kind {
            BlockKind::Ground => self.ground,
            BlockKind::Trunk => self.trunk,
            BlockKind::Leaf => self.leaf,
        }
    }

    /// Deterministic per-cell color: the base color for `kind` with each
    /// channel shifted by at most `jitter`, derived from the cell address
    /// and world seed. Same cell, same seed, same color.
    pub fn tint(&self, kind: BlockKind, gx: i32, gy: i32, seed: i32) -> [u8; 3] {
        let mut out = self.base(kind);
        let mut h = hash_cell(gx, gy, seed);
        for ch in out.iter_mut() {
            let span = 2 * self.jitter as i32 + 1;
            let delta = (h % span as u64) as i32 - self.jitter as i32;
            *ch = (*ch as i32 + delta).clamp(0, 255) as u8;
            h = h.rotate_right(21).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        }
        out
    }
}

#[inline]
fn hash_cell(gx: i32, gy: i32, seed: i32) -> u64 {
    let mut h = (gx as u32 as u64).wrapping_mul(0x85eb_ca6b)
        ^ (gy as u32 as u64).wrapping_mul(0xc2b2_ae35)
        ^ (seed as u32 as u64).wrapping_mul(0x27d4_eb2d);
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h
}
