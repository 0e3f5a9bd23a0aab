use fastnoise_lite::{FastNoiseLite, NoiseType};
use strata_geom::align_down;

use crate::worldgen::WorldGenConfig;

/// Continuous terrain elevation. `height_at(x)` is a pure function of the
/// seed and config: `baseline + amplitude * noise(x)`, with y growing
/// downward and the baseline at half the viewport height.
pub struct HeightMap {
    noise: FastNoiseLite,
    baseline: f32,
    amplitude: f32,
    block_size: i32,
}

impl HeightMap {
    pub fn new(seed: i32, viewport_height: f32, cfg: &WorldGenConfig) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(cfg.height.frequency));
        Self {
            noise,
            baseline: viewport_height / 2.0,
            amplitude: cfg.height.amplitude,
            block_size: cfg.block_size,
        }
    }

    #[inline]
    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    #[inline]
    pub fn block_size(&self) -> i32 {
        self.block_size
    }

    /// Ground elevation at world x. Noise is sampled in column units so the
    /// input magnitude stays small even far from the origin.
    pub fn height_at(&self, x: f32) -> f32 {
        self.baseline + self.amplitude * self.noise.get_noise_2d(x / self.block_size as f32, 0.0)
    }

    /// Top y of the surface block in the column containing `x`: the height
    /// sample floor-aligned to the grid, so every placed block stays
    /// grid-aligned.
    pub fn surface_y(&self, gx: i32) -> i32 {
        align_down(self.height_at(gx as f32), self.block_size)
    }
}
